//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`swapper`] - In-memory [`OrderSource`](crate::port::outbound::swapper::OrderSource)
//!   with scripted simulation and execution results.

pub mod swapper;
