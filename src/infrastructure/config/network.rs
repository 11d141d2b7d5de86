//! Chain connection configuration.

use serde::Deserialize;

use crate::domain::network::NetworkProfile;

/// RPC endpoint and chain settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// HTTP JSON-RPC endpoint.
    pub rpc_url: String,

    /// Expected chain id. The RPC is checked against it before any order is touched.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Network name used to look up per-network secrets. Defaults to the
    /// known profile name for `chain_id`.
    #[serde(default)]
    pub name: Option<String>,

    /// Confirmations to wait for. Defaults to the known profile, else 1.
    #[serde(default)]
    pub block_confirmations: Option<u64>,
}

const fn default_chain_id() -> u64 {
    31337
}

impl NetworkConfig {
    /// Known deployment defaults for this chain, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&'static NetworkProfile> {
        NetworkProfile::for_chain(self.chain_id)
    }

    /// Resolved network name.
    #[must_use]
    pub fn name(&self) -> String {
        match (&self.name, self.profile()) {
            (Some(name), _) => name.clone(),
            (None, Some(profile)) => profile.name.to_string(),
            (None, None) => format!("chain-{}", self.chain_id),
        }
    }

    #[must_use]
    pub fn block_confirmations(&self) -> u64 {
        self.block_confirmations
            .or_else(|| self.profile().map(|p| p.block_confirmations))
            .unwrap_or(1)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".into(),
            chain_id: default_chain_id(),
            name: None,
            block_confirmations: None,
        }
    }
}
