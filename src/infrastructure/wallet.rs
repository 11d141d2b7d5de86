//! Wallet operations facade for CLI.
//!
//! Works from the private key alone; no RPC connection is needed.

use alloy_primitives::Address;
use alloy_signer::Signer;

use crate::adapter::outbound::swapper::client::parse_signer;
use crate::error::{ExecutionError, Result};
use crate::infrastructure::config::settings::Config;

/// Address derived from the configured private key.
///
/// # Errors
///
/// Fails when `WALLET_PRIVATE_KEY` is missing or malformed.
#[allow(clippy::result_large_err)]
pub fn wallet_address(config: &Config) -> Result<Address> {
    let signer = parse_signer(config.private_key()?, Some(config.network.chain_id))?;
    Ok(signer.address())
}

/// EIP-191 personal signature of `message`, hex encoded.
///
/// Used to prove ownership of the keeper address to block explorers.
///
/// # Errors
///
/// Fails when the key is missing or signing fails.
pub async fn sign_message(config: &Config, message: &str) -> Result<String> {
    let signer = parse_signer(config.private_key()?, None)?;
    let signature = signer
        .sign_message(message.as_bytes())
        .await
        .map_err(|e| ExecutionError::OrderRejected(format!("failed to sign message: {e}")))?;
    Ok(format!("0x{}", alloy_primitives::hex::encode(signature.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const HARDHAT_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn config_with_key() -> Config {
        let mut config = Config::default();
        config.wallet.private_key = Some(HARDHAT_KEY.to_string());
        config
    }

    #[test]
    fn derives_address() {
        assert_eq!(
            wallet_address(&config_with_key()).unwrap(),
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
        );
    }

    #[tokio::test]
    async fn signature_recovers_to_signer() {
        let config = config_with_key();
        let hex_sig = sign_message(&config, "I own this address").await.unwrap();
        let bytes = alloy_primitives::hex::decode(&hex_sig).unwrap();
        assert_eq!(bytes.len(), 65);

        let signature = alloy_primitives::Signature::try_from(bytes.as_slice()).unwrap();
        let recovered = signature
            .recover_address_from_msg("I own this address")
            .unwrap();
        assert_eq!(recovered, wallet_address(&config).unwrap());
    }

    #[test]
    fn missing_key_is_config_error() {
        assert!(wallet_address(&Config::default()).is_err());
    }
}
