//! Handlers for `swapkeeper wallet`.

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::{load_config, output};
use crate::error::Result;
use crate::infrastructure::wallet;

/// Show the wallet address derived from the configured key.
#[allow(clippy::result_large_err)]
pub fn execute_address(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let address = wallet::wallet_address(&config)?;

    output::section("Wallet Address");
    output::field("Address", address);
    output::field("Network", config.network.name());
    Ok(())
}

/// Sign a message with the configured key.
pub async fn execute_sign(cli: &Cli, message: &str) -> Result<()> {
    let config = load_config(cli)?;
    let address = wallet::wallet_address(&config)?;
    let signature = wallet::sign_message(&config, message).await?;

    output::section("Signed Message");
    output::field("Address", address);
    output::field("Message", message);
    output::field("Signature", signature);
    Ok(())
}
