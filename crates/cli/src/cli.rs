//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use alloy_chains::NamedChain;
use clap::{Args, Parser, Subcommand, ValueEnum};
use strategy_harness::fixtures::PoolKind;
use strategy_harness::HarvestMode;

/// Strategy harness - fixtures and fork scenarios for a Velodrome/Aerodrome strategy
#[derive(Parser, Debug)]
#[command(name = "harness")]
#[command(about = "Fork harness for a clonable Velodrome/Aerodrome yield strategy", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List per-chain address profiles
    Profiles,
    /// List swap route fixtures and check them against a chain's sweep token
    Routes(RoutesArgs),
    /// Read a strategy's vault record and check debt-ratio invariants
    Status(StatusArgs),
    /// Run the cloning scenario on a fork
    Cloning(ScenarioArgs),
    /// Run the harvest-trigger scenario on a fork
    Triggers(ScenarioArgs),
}

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Chain whose sweep token routes must start at (default: base)
    #[arg(long, default_value = "base")]
    pub chain: ChainArg,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Vault contract address
    #[arg(long)]
    pub vault: String,

    /// Strategy contract address
    #[arg(long)]
    pub strategy: String,

    /// Fork RPC URL (can also use FORK_RPC_URL env var)
    #[arg(long, env = "FORK_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Fork RPC URL (can also use FORK_RPC_URL env var)
    #[arg(long, env = "FORK_RPC_URL")]
    pub rpc_url: String,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pool fixture (overrides the config file)
    #[arg(long)]
    pub pool: Option<PoolKind>,

    /// Harvest mode (overrides the config file)
    #[arg(long)]
    pub mode: Option<ModeArg>,

    /// Blocks mined for external settlement
    #[arg(long, default_value = "9")]
    pub target: u64,

    /// Attach to an existing vault instead of deploying one
    #[arg(long)]
    pub vault: Option<String>,

    /// Skip the calls that are expected to revert
    #[arg(long)]
    pub no_revert_checks: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    Direct,
    Yswaps,
    External,
}

impl ModeArg {
    pub fn into_mode(self, target: u64) -> HarvestMode {
        match self {
            Self::Direct => HarvestMode::Direct,
            Self::Yswaps => HarvestMode::YSwaps,
            Self::External => HarvestMode::ExternalSettlement { target },
        }
    }
}

/// Wrapper for NamedChain that implements FromStr with aliases
#[derive(Clone, Copy, Debug)]
pub struct ChainArg(pub NamedChain);

impl FromStr for ChainArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chain = match s.to_lowercase().as_str() {
            "ethereum" | "eth" | "mainnet" | "1" => NamedChain::Mainnet,
            "optimism" | "op" | "10" => NamedChain::Optimism,
            "base" | "8453" => NamedChain::Base,
            _ => {
                return Err(format!(
                    "Unknown chain: {}. Supported chains: ethereum, optimism, base",
                    s
                ))
            }
        };
        Ok(ChainArg(chain))
    }
}
