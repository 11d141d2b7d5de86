//! JSON-RPC client for a deployed `LimitSwapper`.
//!
//! Implements every swapper port over an alloy provider with a local
//! signer. Simulations are `eth_call`s from the signer's address, so they
//! see exactly what a submitted transaction would.

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::Address;
use alloy_provider::network::{Ethereum, EthereumWallet, Network};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::{debug, info};

use super::contract::{describe_error, order_id_from_u256, order_id_to_u256, ILimitSwapper};
use crate::domain::id::OrderId;
use crate::domain::order::{NewOrder, Order};
use crate::domain::outcome::Confirmation;
use crate::error::{ConfigError, Error, ExecutionError, Result};
use crate::port::outbound::swapper::{ExecutionSimulator, OrderAdmin, OrderSource};

type SwapperInstance = ILimitSwapper::ILimitSwapperInstance<DynProvider>;
type Receipt = <Ethereum as Network>::ReceiptResponse;

/// Connection settings for [`LimitSwapperClient`].
#[derive(Debug, Clone)]
pub struct SwapperClientConfig {
    pub rpc_url: String,
    pub chain_id: u64,
    pub swapper_address: Address,
    pub private_key: String,
    pub block_confirmations: u64,
    pub confirmation_timeout: Duration,
}

/// Signed connection to one `LimitSwapper` deployment.
pub struct LimitSwapperClient {
    contract: SwapperInstance,
    signer_address: Address,
    block_confirmations: u64,
    confirmation_timeout: Duration,
}

/// Parse a hex private key into a chain-bound signer.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when the key is malformed.
#[allow(clippy::result_large_err)]
pub fn parse_signer(private_key: &str, chain_id: Option<u64>) -> Result<PrivateKeySigner> {
    let signer = PrivateKeySigner::from_str(private_key.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field: "WALLET_PRIVATE_KEY",
            reason: e.to_string(),
        }
    })?;
    Ok(signer.with_chain_id(chain_id))
}

impl LimitSwapperClient {
    /// Connect to the RPC and verify it serves the configured chain.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a bad key, URL or chain id, and a
    /// connection error when the RPC cannot be reached.
    pub async fn connect(config: &SwapperClientConfig) -> Result<Self> {
        let signer = parse_signer(&config.private_key, Some(config.chain_id))?;
        let signer_address = signer.address();

        let rpc_url: url::Url =
            config
                .rpc_url
                .parse()
                .map_err(|e: url::ParseError| ConfigError::InvalidValue {
                    field: "rpc_url",
                    reason: e.to_string(),
                })?;
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(rpc_url)
            .erased();

        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| Error::Connection(format!("failed to detect network: {e}")))?;
        if chain_id != config.chain_id {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: format!("RPC serves chain {chain_id}, expected {}", config.chain_id),
            }
            .into());
        }

        info!(
            chain_id,
            swapper = %config.swapper_address,
            signer = %signer_address,
            "Connected to LimitSwapper"
        );

        Ok(Self {
            contract: ILimitSwapper::new(config.swapper_address, provider),
            signer_address,
            block_confirmations: config.block_confirmations,
            confirmation_timeout: config.confirmation_timeout,
        })
    }

    /// Address transactions are sent from.
    #[must_use]
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Address of the swapper contract.
    #[must_use]
    pub fn swapper_address(&self) -> Address {
        *self.contract.address()
    }

    /// Wait for a sent transaction and check that it succeeded.
    async fn confirm(
        &self,
        pending: PendingTransactionBuilder<Ethereum>,
    ) -> std::result::Result<Receipt, String> {
        let tx_hash = *pending.tx_hash();
        debug!(tx_hash = %tx_hash, "Waiting for confirmation");

        let receipt = pending
            .with_required_confirmations(self.block_confirmations)
            .with_timeout(Some(self.confirmation_timeout))
            .get_receipt()
            .await
            .map_err(|e| format!("confirmation failed for {tx_hash}: {e}"))?;

        if !receipt.status() {
            return Err(format!("transaction {tx_hash} reverted"));
        }
        Ok(receipt)
    }
}

fn confirmation_of(receipt: &Receipt) -> Confirmation {
    Confirmation {
        tx_hash: format!("{:?}", receipt.transaction_hash),
        block_number: receipt.block_number,
    }
}

#[async_trait]
impl OrderSource for LimitSwapperClient {
    async fn list_active_orders(&self) -> Result<Vec<Order>> {
        let raw = self
            .contract
            .getActiveOrders()
            .call()
            .await
            .map_err(|e| ExecutionError::SnapshotFailed(describe_error(&e)))?;

        raw.into_iter()
            .map(|order| Order::try_from(order).map_err(Error::from))
            .collect()
    }

    async fn submit_execution(&self, order_id: OrderId) -> Result<Confirmation> {
        let failed = |reason: String| ExecutionError::ExecutionFailed { order_id, reason };

        let pending = self
            .contract
            .executeLimitOrder(order_id_to_u256(order_id))
            .send()
            .await
            .map_err(|e| failed(describe_error(&e)))?;

        let receipt = self.confirm(pending).await.map_err(failed)?;
        Ok(confirmation_of(&receipt))
    }
}

#[async_trait]
impl ExecutionSimulator for LimitSwapperClient {
    async fn simulate_execution(&self, order_id: OrderId) -> Result<alloy_primitives::U256> {
        self.contract
            .executeLimitOrder(order_id_to_u256(order_id))
            .from(self.signer_address)
            .call()
            .await
            .map_err(|e| {
                ExecutionError::SimulationFailed {
                    order_id,
                    reason: describe_error(&e),
                }
                .into()
            })
    }
}

#[async_trait]
impl OrderAdmin for LimitSwapperClient {
    async fn get_order(&self, order_id: OrderId) -> Result<Order> {
        let raw = self
            .contract
            .getOrder(order_id_to_u256(order_id))
            .call()
            .await
            .map_err(|e| ExecutionError::OrderRejected(describe_error(&e)))?;
        Ok(Order::try_from(raw)?)
    }

    async fn create_order(&self, order: &NewOrder) -> Result<OrderId> {
        info!(
            source_token = %order.source_token,
            destination_token = %order.destination_token,
            receiver = %order.receiver,
            source_amount = %order.source_amount,
            desired_output = %order.desired_output,
            "Creating limit order"
        );

        let pending = self
            .contract
            .createLimitOrder(
                order.source_token,
                order.destination_token,
                order.receiver,
                order.source_amount,
                order.desired_output,
            )
            .send()
            .await
            .map_err(|e| ExecutionError::OrderRejected(describe_error(&e)))?;

        let receipt = self
            .confirm(pending)
            .await
            .map_err(ExecutionError::OrderRejected)?;
        let confirmation = confirmation_of(&receipt);

        let created = receipt
            .inner
            .logs()
            .iter()
            .find_map(|log| log.log_decode::<ILimitSwapper::OrderCreated>().ok())
            .ok_or_else(|| {
                ExecutionError::Decode(format!(
                    "no OrderCreated event in transaction {}",
                    confirmation.tx_hash
                ))
            })?;
        let order_id = order_id_from_u256(created.inner.data.orderId)?;

        info!(order_id = %order_id, tx_hash = %confirmation.tx_hash, "Order created");
        Ok(order_id)
    }

    async fn cancel_order(&self, order_id: OrderId) -> Result<Confirmation> {
        let pending = self
            .contract
            .cancelLimitOrder(order_id_to_u256(order_id))
            .send()
            .await
            .map_err(|e| ExecutionError::OrderRejected(describe_error(&e)))?;

        let receipt = self
            .confirm(pending)
            .await
            .map_err(ExecutionError::OrderRejected)?;
        let confirmation = confirmation_of(&receipt);

        info!(order_id = %order_id, tx_hash = %confirmation.tx_hash, "Order canceled");
        Ok(confirmation)
    }
}
