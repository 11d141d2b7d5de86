//! Chain-agnostic domain types for limit-order keeping.
//!
//! - [`id`] - Order identifiers
//! - [`order`] - Orders as read from the swapper contract
//! - [`tolerance`] - Slippage tolerance and the minimum acceptable output
//! - [`outcome`] - Per-order evaluation results
//! - [`report`] - Aggregated results of one keeper run
//! - [`network`] - Known network profiles

pub mod id;
pub mod network;
pub mod order;
pub mod outcome;
pub mod report;
pub mod tolerance;
