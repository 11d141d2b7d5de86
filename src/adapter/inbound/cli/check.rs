//! Handlers for `swapkeeper check`.

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::{load_config, output};
use crate::error::Result;

/// Validate the configuration file without connecting to the chain.
#[allow(clippy::result_large_err)]
pub fn execute_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    output::section("Configuration");
    output::field("File", cli.config.display());
    output::field("Network", config.network.name());
    output::field("Chain ID", config.network.chain_id);
    output::field("RPC", &config.network.rpc_url);
    output::field("Confirmations", config.network.block_confirmations());
    output::field("Interval", format!("{}s", config.keeper.interval_secs));
    output::field("Tolerance", config.keeper.tolerance_percent);

    match config.network.profile() {
        Some(profile) => {
            let kind = if profile.is_development() {
                "development"
            } else {
                "live"
            };
            output::field("Profile", format!("{} ({kind})", profile.name));
        }
        None => output::warn("No known profile for this chain; order defaults unavailable"),
    }

    match config.swapper_address() {
        Ok(address) => output::field("Swapper", address),
        Err(e) => output::warn(&e.to_string()),
    }
    if config.wallet.private_key.is_some() {
        output::ok("WALLET_PRIVATE_KEY is set");
    } else {
        output::warn("WALLET_PRIVATE_KEY is not set");
    }

    output::ok("Configuration is valid");
    Ok(())
}
