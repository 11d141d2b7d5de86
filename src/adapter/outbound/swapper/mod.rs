//! `LimitSwapper` contract integration.

pub mod client;
pub mod contract;
