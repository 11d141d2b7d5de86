//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all keeper settings.
//! Configuration is loaded from a TOML file with environment variable
//! overrides for secrets: `WALLET_PRIVATE_KEY` and, when `[swapper] address`
//! is not set, `<NETWORK>_LIMIT_SWAPPER_ADDRESS`.
//!
//! # Example
//!
//! ```no_run
//! use swapkeeper::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use super::keeper::KeeperConfig;
use super::logging::LoggingConfig;
use super::network::NetworkConfig;
use super::wallet::WalletConfig;
use crate::error::{ConfigError, Result};

/// Swapper contract location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwapperConfig {
    /// Deployed `LimitSwapper` proxy address.
    #[serde(default)]
    pub address: Option<String>,
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Chain connection settings.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Swapper contract settings.
    #[serde(default)]
    pub swapper: SwapperConfig,

    /// Keeper schedule and tolerance.
    #[serde(default)]
    pub keeper: KeeperConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Wallet configuration for transaction signing.
    ///
    /// Private key is loaded from `WALLET_PRIVATE_KEY` environment variable.
    #[serde(default)]
    pub wallet: WalletConfig,
}

/// Environment variable holding the swapper address for `network`.
#[must_use]
pub fn swapper_address_env_var(network: &str) -> String {
    let network: String = network
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{network}_LIMIT_SWAPPER_ADDRESS")
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the private key from `WALLET_PRIVATE_KEY` and, if the swapper
    /// address is not configured, the per-network address variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_secrets(|var| std::env::var(var).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML content without reading the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Fill secrets from `lookup`, which maps a variable name to its value.
    ///
    /// Secrets come from the environment, never from the config file.
    pub fn apply_secrets<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.wallet.private_key =
            lookup("WALLET_PRIVATE_KEY").filter(|key| !key.trim().is_empty());
        if self.swapper.address.is_none() {
            self.swapper.address = lookup(&swapper_address_env_var(&self.network.name()));
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.network.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        url::Url::parse(&self.network.rpc_url).map_err(|e| ConfigError::InvalidValue {
            field: "rpc_url",
            reason: e.to_string(),
        })?;
        if self.network.chain_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.network.block_confirmations == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "block_confirmations",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.keeper.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.keeper.confirmation_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "confirmation_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.keeper.max_runs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_runs",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }
        if let Some(address) = &self.swapper.address {
            Address::from_str(address.trim()).map_err(|e| ConfigError::InvalidValue {
                field: "swapper.address",
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Swapper contract address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when neither the config file nor
    /// the per-network environment variable provides one.
    #[allow(clippy::result_large_err)]
    pub fn swapper_address(&self) -> Result<Address> {
        let raw = self
            .swapper
            .address
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: "swapper.address",
            })?;
        Address::from_str(raw.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "swapper.address",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Private key used to sign transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `WALLET_PRIVATE_KEY` is unset.
    #[allow(clippy::result_large_err)]
    pub fn private_key(&self) -> Result<&str> {
        self.wallet.private_key.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            }
            .into()
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
