//! In-memory swapper with scripted behavior.
//!
//! [`ScriptedSwapper`] stands in for the on-chain contract. Each order
//! carries a [`SimulationScript`] deciding what a simulation returns, and
//! individual executions can be made to fail. Executing an order marks it
//! filled, so a second execution fails like it would on chain.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::id::OrderId;
use crate::domain::order::{NewOrder, Order, OrderStatus};
use crate::domain::outcome::Confirmation;
use crate::error::{ExecutionError, Result};
use crate::port::outbound::swapper::{ExecutionSimulator, OrderAdmin, OrderSource};

/// What a simulation of one order returns.
#[derive(Debug, Clone)]
pub enum SimulationScript {
    Output(u64),
    Fail(String),
}

struct Entry {
    order: Order,
    simulation: SimulationScript,
    fail_execution: Option<String>,
}

/// Scripted stand-in for the swapper contract.
pub struct ScriptedSwapper {
    entries: Mutex<Vec<Entry>>,
    executed: Mutex<Vec<OrderId>>,
    simulation_calls: AtomicU32,
    fail_snapshot: AtomicBool,
    maker: Address,
}

impl ScriptedSwapper {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            executed: Mutex::new(Vec::new()),
            simulation_calls: AtomicU32::new(0),
            fail_snapshot: AtomicBool::new(false),
            maker: Address::repeat_byte(0x11),
        }
    }

    /// Add an active order wanting `desired_output`.
    pub fn add_order(&self, id: u64, desired_output: u64, simulation: SimulationScript) {
        let mut order = Order::active(OrderId::new(id), U256::from(desired_output));
        order.maker = self.maker;
        self.entries.lock().push(Entry {
            order,
            simulation,
            fail_execution: None,
        });
    }

    /// Make executions of `id` fail with `reason`.
    pub fn fail_execution(&self, id: u64, reason: &str) {
        if let Some(entry) = self.find_mut(OrderId::new(id), &mut self.entries.lock()) {
            entry.fail_execution = Some(reason.to_string());
        }
    }

    /// Replace the simulation script of `id`.
    pub fn set_simulation(&self, id: u64, simulation: SimulationScript) {
        if let Some(entry) = self.find_mut(OrderId::new(id), &mut self.entries.lock()) {
            entry.simulation = simulation;
        }
    }

    /// Make `list_active_orders` fail.
    pub fn fail_snapshot(&self) {
        self.fail_snapshot.store(true, Ordering::SeqCst);
    }

    /// Ids of successfully executed orders, in execution order.
    pub fn executed_ids(&self) -> Vec<OrderId> {
        self.executed.lock().clone()
    }

    pub fn simulation_calls(&self) -> u32 {
        self.simulation_calls.load(Ordering::SeqCst)
    }

    pub fn status_of(&self, id: u64) -> Option<OrderStatus> {
        self.entries
            .lock()
            .iter()
            .find(|e| e.order.id == OrderId::new(id))
            .map(|e| e.order.status)
    }

    fn find_mut<'a>(&self, id: OrderId, entries: &'a mut [Entry]) -> Option<&'a mut Entry> {
        entries.iter_mut().find(|e| e.order.id == id)
    }

    fn confirmation(id: OrderId) -> Confirmation {
        Confirmation {
            tx_hash: format!("0x{:064x}", id.value()),
            block_number: Some(1),
        }
    }
}

impl Default for ScriptedSwapper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderSource for ScriptedSwapper {
    async fn list_active_orders(&self) -> Result<Vec<Order>> {
        if self.fail_snapshot.load(Ordering::SeqCst) {
            return Err(ExecutionError::SnapshotFailed("rpc unavailable".into()).into());
        }
        Ok(self
            .entries
            .lock()
            .iter()
            .filter(|e| e.order.is_active())
            .map(|e| e.order.clone())
            .collect())
    }

    async fn submit_execution(&self, order_id: OrderId) -> Result<Confirmation> {
        let mut entries = self.entries.lock();
        let Some(entry) = self.find_mut(order_id, &mut entries) else {
            return Err(ExecutionError::ExecutionFailed {
                order_id,
                reason: "order does not exist".into(),
            }
            .into());
        };
        if let Some(reason) = &entry.fail_execution {
            return Err(ExecutionError::ExecutionFailed {
                order_id,
                reason: reason.clone(),
            }
            .into());
        }
        if !entry.order.is_active() {
            return Err(ExecutionError::ExecutionFailed {
                order_id,
                reason: format!("order is {}", entry.order.status),
            }
            .into());
        }
        entry.order.status = OrderStatus::Filled;
        drop(entries);

        self.executed.lock().push(order_id);
        Ok(Self::confirmation(order_id))
    }
}

#[async_trait]
impl ExecutionSimulator for ScriptedSwapper {
    async fn simulate_execution(&self, order_id: OrderId) -> Result<U256> {
        self.simulation_calls.fetch_add(1, Ordering::SeqCst);
        let entries = self.entries.lock();
        let entry = entries.iter().find(|e| e.order.id == order_id);
        match entry.map(|e| &e.simulation) {
            Some(SimulationScript::Output(amount)) => Ok(U256::from(*amount)),
            Some(SimulationScript::Fail(reason)) => Err(ExecutionError::SimulationFailed {
                order_id,
                reason: reason.clone(),
            }
            .into()),
            None => Err(ExecutionError::SimulationFailed {
                order_id,
                reason: "order does not exist".into(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl OrderAdmin for ScriptedSwapper {
    async fn get_order(&self, order_id: OrderId) -> Result<Order> {
        self.entries
            .lock()
            .iter()
            .find(|e| e.order.id == order_id)
            .map(|e| e.order.clone())
            .ok_or_else(|| ExecutionError::OrderRejected(format!("order {order_id} not found")).into())
    }

    async fn create_order(&self, new: &NewOrder) -> Result<OrderId> {
        let mut entries = self.entries.lock();
        let next = entries
            .iter()
            .map(|e| e.order.id.value() + 1)
            .max()
            .unwrap_or(0);
        let id = OrderId::new(next);
        entries.push(Entry {
            order: Order {
                id,
                maker: self.maker,
                receiver: new.receiver,
                source_token: new.source_token,
                destination_token: new.destination_token,
                source_amount: new.source_amount,
                desired_output: new.desired_output,
                status: OrderStatus::Active,
            },
            simulation: SimulationScript::Fail("not scripted".into()),
            fail_execution: None,
        });
        Ok(id)
    }

    async fn cancel_order(&self, order_id: OrderId) -> Result<Confirmation> {
        let mut entries = self.entries.lock();
        let entry = self
            .find_mut(order_id, &mut entries)
            .ok_or_else(|| ExecutionError::OrderRejected(format!("order {order_id} not found")))?;
        if !entry.order.is_active() {
            return Err(
                ExecutionError::OrderRejected(format!("order {order_id} is not active")).into(),
            );
        }
        entry.order.status = OrderStatus::Canceled;
        Ok(Self::confirmation(order_id))
    }
}
