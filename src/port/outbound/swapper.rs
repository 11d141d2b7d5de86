//! Swapper ports for reading, simulating and executing limit orders.
//!
//! The evaluator needs only [`OrderSource`] and [`ExecutionSimulator`].
//! [`OrderAdmin`] backs the operator commands for creating and canceling
//! orders.

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::domain::id::OrderId;
use crate::domain::order::{NewOrder, Order};
use crate::domain::outcome::Confirmation;
use crate::error::Result;

/// Supplies active orders and executes them.
///
/// # Errors
///
/// `list_active_orders` fails with `ExecutionError::SnapshotFailed`;
/// `submit_execution` fails with `ExecutionError::ExecutionFailed` on revert,
/// rejection or confirmation timeout.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Orders currently in `Active` status, in a stable order.
    async fn list_active_orders(&self) -> Result<Vec<Order>>;

    /// Execute an order and wait for its confirmation.
    async fn submit_execution(&self, order_id: OrderId) -> Result<Confirmation>;
}

/// Read-only probe of what executing an order would yield.
#[async_trait]
pub trait ExecutionSimulator: Send + Sync {
    /// Destination-token output an execution would produce right now.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::SimulationFailed` when the output cannot be
    /// determined for any reason.
    async fn simulate_execution(&self, order_id: OrderId) -> Result<U256>;
}

/// Maker-side order management.
#[async_trait]
pub trait OrderAdmin: Send + Sync {
    /// Fetch an order in any status.
    async fn get_order(&self, order_id: OrderId) -> Result<Order>;

    /// Create a limit order and return its id.
    async fn create_order(&self, order: &NewOrder) -> Result<OrderId>;

    /// Cancel an order. Only its maker may do so.
    async fn cancel_order(&self, order_id: OrderId) -> Result<Confirmation>;
}
