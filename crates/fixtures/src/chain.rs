//! Per-chain address tables.
//!
//! One [`ChainProfile`] is selected per run and never changes afterwards.
//! Rewards, guardian, strategist and keeper roles are all played by the
//! management account.

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address};
use serde::Serialize;

use crate::error::{FixtureError, Result};

/// Addresses that differ by chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainProfile {
    /// Chain the profile applies to.
    pub chain: NamedChain,
    /// Vault governance.
    pub governance: Address,
    /// Management multisig; also rewards, guardian, strategist and keeper.
    pub management: Address,
    /// Health check contract.
    pub health_check: Address,
    /// Base-fee oracle consulted by harvest triggers.
    pub base_fee_oracle: Address,
    /// Reward token the strategy sweeps and sells.
    pub sweep_token: Option<Address>,
    /// Large holder of the sweep token.
    pub sweep_token_whale: Option<Address>,
    /// ySwaps trade factory.
    pub trade_factory: Option<Address>,
    /// Keeper wrapper contract.
    pub keeper_wrapper: Option<Address>,
}

impl ChainProfile {
    /// Look up the profile for a chain.
    pub fn for_chain(chain: NamedChain) -> Option<&'static ChainProfile> {
        PROFILES.iter().find(|p| p.chain == chain)
    }

    /// Look up the profile for a numeric chain id.
    pub fn for_chain_id(id: u64) -> Result<&'static ChainProfile> {
        NamedChain::try_from(id)
            .ok()
            .and_then(Self::for_chain)
            .ok_or(FixtureError::UnsupportedChain(id))
    }

    /// Numeric chain id.
    pub fn chain_id(&self) -> u64 {
        self.chain.into()
    }

    /// The sweep token, or an error on chains without one.
    pub fn require_sweep_token(&self) -> Result<Address> {
        self.sweep_token
            .ok_or(FixtureError::MissingSweepToken(self.chain))
    }

    pub fn rewards(&self) -> Address {
        self.management
    }

    pub fn guardian(&self) -> Address {
        self.management
    }

    pub fn strategist(&self) -> Address {
        self.management
    }

    pub fn keeper(&self) -> Address {
        self.management
    }
}

pub const MAINNET: ChainProfile = ChainProfile {
    chain: NamedChain::Mainnet,
    governance: address!("FEB4acf3df3cDEA7399794D0869ef76A6EfAff52"),
    management: address!("16388463d60FFE0661Cf7F1f31a7D658aC790ff7"),
    health_check: address!("ddcea799ff1699e98edf118e0629a974df7df012"),
    base_fee_oracle: address!("feCA6895DcF50d6350ad0b5A8232CF657C316dA7"),
    sweep_token: None,
    sweep_token_whale: None,
    trade_factory: Some(address!("cADBA199F3AC26F67f660C89d43eB1820b7f7a3b")),
    keeper_wrapper: Some(address!("0D26E894C2371AB6D20d99A65E991775e3b5CAd7")),
};

pub const OPTIMISM: ChainProfile = ChainProfile {
    chain: NamedChain::Optimism,
    governance: address!("F5d9D6133b698cE29567a90Ab35CfB874204B3A7"),
    management: address!("ea3a15df68fCdBE44Fdb0DB675B2b3A14a148b26"),
    health_check: address!("3d8F58774611676fd196D26149C71a9142C45296"),
    base_fee_oracle: address!("bf4A735F123A9666574Ff32158ce2F7b7027De9A"),
    // VELO v2
    sweep_token: Some(address!("9560e827aF36c94D2Ac33a39bCE1Fe78631088Db")),
    sweep_token_whale: None,
    trade_factory: None,
    keeper_wrapper: Some(address!("9Ce0115381f009E382acd52761127eFF61061482")),
};

pub const BASE: ChainProfile = ChainProfile {
    chain: NamedChain::Base,
    governance: address!("bfAABa9F56A39B814281D68d2Ad949e88D06b02E"),
    management: address!("01fE3347316b2223961B20689C65eaeA71348e93"),
    health_check: address!("8273217252254Ad7353f227aaEcd2b1C4A326Fa2"),
    base_fee_oracle: address!("298Bd23E25C01440D68d4D2708bFf6A7E10a1db5"),
    // AERO
    sweep_token: Some(address!("940181a94A35A4569E4529A3CDfB74e38FD98631")),
    // AERO veNFT
    sweep_token_whale: Some(address!("eBf418Fe2512e7E6bd9b87a8F0f294aCDC67e6B4")),
    trade_factory: None,
    keeper_wrapper: None,
};

/// Every chain the harness has addresses for.
pub const PROFILES: &[ChainProfile] = &[MAINNET, OPTIMISM, BASE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(ChainProfile::for_chain_id(8453).unwrap().chain, NamedChain::Base);
        assert_eq!(ChainProfile::for_chain_id(10).unwrap().chain, NamedChain::Optimism);
        assert_eq!(ChainProfile::for_chain_id(1).unwrap().chain, NamedChain::Mainnet);
    }

    #[test]
    fn test_unknown_chain_id() {
        assert_eq!(
            ChainProfile::for_chain_id(42161),
            Err(FixtureError::UnsupportedChain(42161))
        );
        assert_eq!(
            ChainProfile::for_chain_id(9999999999999),
            Err(FixtureError::UnsupportedChain(9999999999999))
        );
    }

    #[test]
    fn test_mainnet_has_no_sweep_token() {
        assert_eq!(
            MAINNET.require_sweep_token(),
            Err(FixtureError::MissingSweepToken(NamedChain::Mainnet))
        );
        assert!(BASE.require_sweep_token().is_ok());
    }

    #[test]
    fn test_roles_collapse_to_management() {
        for profile in PROFILES {
            assert_eq!(profile.rewards(), profile.management);
            assert_eq!(profile.guardian(), profile.management);
            assert_eq!(profile.strategist(), profile.management);
            assert_eq!(profile.keeper(), profile.management);
        }
    }

    #[test]
    fn test_profiles_are_unique_per_chain() {
        for (i, a) in PROFILES.iter().enumerate() {
            for b in &PROFILES[i + 1..] {
                assert_ne!(a.chain, b.chain);
            }
        }
    }

    #[test]
    fn test_chain_id_roundtrip() {
        for profile in PROFILES {
            let id = profile.chain_id();
            assert_eq!(ChainProfile::for_chain_id(id).unwrap(), profile);
        }
    }
}
