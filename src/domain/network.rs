//! Known network profiles.
//!
//! Each profile carries the defaults the swapper was deployed with: the
//! tokens it accepts and how many confirmations to wait for.

use alloy_primitives::{address, Address};

/// Static deployment defaults for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    pub chain_id: u64,
    pub name: &'static str,
    pub block_confirmations: u64,
    pub allowed_source_tokens: &'static [Address],
    pub allowed_destination_tokens: &'static [Address],
}

const MAINNET_USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
const MAINNET_WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
const GOERLI_USDC: Address = address!("07865c6e87b9f70255377e024ace6630c1eaa37f");
const GOERLI_WETH: Address = address!("B4FBF271143F4FBf7B91A5ded31805e42b2208d6");
const ARBITRUM_USDC: Address = address!("FF970A61A04b1cA14834A43f5dE4533eBDDB5CC8");
const ARBITRUM_WETH: Address = address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1");

/// Local development node (forks mainnet token addresses).
pub const LOCALHOST: NetworkProfile = NetworkProfile {
    chain_id: 31337,
    name: "localhost",
    block_confirmations: 1,
    allowed_source_tokens: &[MAINNET_USDC],
    allowed_destination_tokens: &[MAINNET_WETH],
};

pub const GOERLI: NetworkProfile = NetworkProfile {
    chain_id: 5,
    name: "goerli",
    block_confirmations: 5,
    allowed_source_tokens: &[GOERLI_USDC],
    allowed_destination_tokens: &[GOERLI_WETH],
};

pub const ARBITRUM: NetworkProfile = NetworkProfile {
    chain_id: 42161,
    name: "arbitrum",
    block_confirmations: 5,
    allowed_source_tokens: &[ARBITRUM_USDC],
    allowed_destination_tokens: &[ARBITRUM_WETH],
};

/// Networks that are local test chains.
pub const DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

const PROFILES: &[NetworkProfile] = &[LOCALHOST, GOERLI, ARBITRUM];

impl NetworkProfile {
    /// Look up a profile by chain id.
    #[must_use]
    pub fn for_chain(chain_id: u64) -> Option<&'static Self> {
        PROFILES.iter().find(|p| p.chain_id == chain_id)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        DEVELOPMENT_CHAINS.contains(&self.name)
    }

    /// First source token the swapper accepts on this chain.
    #[must_use]
    pub fn default_source_token(&self) -> Option<Address> {
        self.allowed_source_tokens.first().copied()
    }

    /// First destination token the swapper accepts on this chain.
    #[must_use]
    pub fn default_destination_token(&self) -> Option<Address> {
        self.allowed_destination_tokens.first().copied()
    }
}
