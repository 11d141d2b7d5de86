//! Swapkeeper - keeper for on-chain limit orders.
//!
//! Reads the active orders of a deployed `LimitSwapper` contract, simulates
//! each execution and submits only those whose simulated output clears a
//! slippage tolerance below the maker's desired amount.
//!
//! # Modules
//!
//! - [`domain`] - Orders, tolerance math, outcomes and run reports
//! - [`port`] - Traits the application needs from the contract
//! - [`application`] - The evaluator and the scheduled keeper loop
//! - [`adapter`] - CLI and JSON-RPC contract client (requires `onchain`)
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `onchain` - Contract bindings, signer and RPC provider (default)
//! - `testkit` - Scripted in-memory swapper for tests
//!
//! # Example
//!
//! ```
//! use alloy_primitives::U256;
//! use swapkeeper::domain::tolerance::SlippageTolerance;
//!
//! let tolerance = SlippageTolerance::new(5).unwrap();
//! assert_eq!(tolerance.min_acceptable(U256::from(1600)), U256::from(1520));
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(feature = "onchain")]
pub mod adapter;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
