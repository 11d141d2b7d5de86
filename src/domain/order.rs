//! Limit orders as seen by the keeper.
//!
//! Orders are owned by the swapper contract. The keeper only reads them and
//! asks the contract to act on them; status transitions happen on chain.

use std::fmt;

use alloy_primitives::{Address, U256};
use serde::Serialize;

use super::id::OrderId;

/// Lifecycle status of an order, as encoded by the contract (`uint8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Waiting to be executed.
    Active,
    /// Executed by a keeper.
    Filled,
    /// Canceled by its maker.
    Canceled,
}

impl OrderStatus {
    /// Decode the contract's status code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Active),
            1 => Some(Self::Filled),
            2 => Some(Self::Canceled),
            _ => None,
        }
    }

    /// The contract's status code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Filled => 1,
            Self::Canceled => 2,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Filled => "filled",
            Self::Canceled => "canceled",
        };
        f.write_str(label)
    }
}

/// A limit order stored in the swapper contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub maker: Address,
    pub receiver: Address,
    pub source_token: Address,
    pub destination_token: Address,
    /// Amount of source token escrowed for the swap.
    pub source_amount: U256,
    /// Amount of destination token the maker wants, in the token's base units.
    pub desired_output: U256,
    pub status: OrderStatus,
}

impl Order {
    /// Build an active order with only the fields the evaluator looks at.
    #[must_use]
    pub fn active(id: OrderId, desired_output: U256) -> Self {
        Self {
            id,
            maker: Address::ZERO,
            receiver: Address::ZERO,
            source_token: Address::ZERO,
            destination_token: Address::ZERO,
            source_amount: U256::ZERO,
            desired_output,
            status: OrderStatus::Active,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Active
    }
}

/// Parameters for creating a new limit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub source_token: Address,
    pub destination_token: Address,
    pub receiver: Address,
    pub source_amount: U256,
    pub desired_output: U256,
}
