//! Outbound adapters (driven side).

pub mod swapper;
