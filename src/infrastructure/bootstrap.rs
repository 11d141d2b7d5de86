//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::swapper::client::{LimitSwapperClient, SwapperClientConfig};
use crate::application::evaluator::OrderEvaluator;
use crate::application::keeper::Keeper;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Resolve client settings from configuration.
///
/// # Errors
///
/// Fails when the private key or swapper address is missing.
#[allow(clippy::result_large_err)]
pub fn client_config(config: &Config) -> Result<SwapperClientConfig> {
    Ok(SwapperClientConfig {
        rpc_url: config.network.rpc_url.clone(),
        chain_id: config.network.chain_id,
        swapper_address: config.swapper_address()?,
        private_key: config.private_key()?.to_string(),
        block_confirmations: config.network.block_confirmations(),
        confirmation_timeout: config.keeper.confirmation_timeout(),
    })
}

/// Connect to the configured swapper.
///
/// # Errors
///
/// Fails on missing secrets, an unreachable RPC, or a chain id mismatch.
pub async fn connect_swapper(config: &Config) -> Result<Arc<LimitSwapperClient>> {
    let settings = client_config(config)?;
    info!(
        network = %config.network.name(),
        confirmations = settings.block_confirmations,
        "Connecting to swapper"
    );
    let client = LimitSwapperClient::connect(&settings).await?;
    Ok(Arc::new(client))
}

/// Build an evaluator over the configured swapper.
///
/// # Errors
///
/// See [`connect_swapper`].
pub async fn build_evaluator(config: &Config) -> Result<OrderEvaluator> {
    let client = connect_swapper(config).await?;
    Ok(OrderEvaluator::new(client.clone(), client))
}

/// Build the scheduled keeper.
///
/// # Errors
///
/// See [`connect_swapper`].
pub async fn build_keeper(config: &Config) -> Result<Keeper> {
    let evaluator = build_evaluator(config).await?;
    Ok(Keeper::new(evaluator, config.keeper.schedule()))
}
