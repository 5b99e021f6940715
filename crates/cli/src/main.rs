//! Strategy harness CLI - list fixtures and run fork scenarios.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_cloning, run_profiles, run_routes, run_status, run_triggers};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Profiles => run_profiles(cli.format)?,
        Commands::Routes(args) => run_routes(&args, cli.format)?,
        Commands::Status(args) => run_status(&args, cli.format).await?,
        Commands::Cloning(args) => run_cloning(&args, cli.format).await?,
        Commands::Triggers(args) => run_triggers(&args, cli.format).await?,
    }

    Ok(())
}
