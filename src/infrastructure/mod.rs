//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration loading, logging, and runtime wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`wallet`] - Wallet operations facade

#[cfg(feature = "onchain")]
pub mod bootstrap;
pub mod config;
#[cfg(feature = "onchain")]
pub mod wallet;
