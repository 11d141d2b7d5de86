use thiserror::Error;

use crate::domain::id::OrderId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Contract interaction errors with structured variants.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("failed to fetch active orders: {0}")]
    SnapshotFailed(String),

    #[error("simulation failed for order {order_id}: {reason}")]
    SimulationFailed { order_id: OrderId, reason: String },

    #[error("execution failed for order {order_id}: {reason}")]
    ExecutionFailed { order_id: OrderId, reason: String },

    #[error("transaction rejected: {0}")]
    OrderRejected(String),

    #[error("failed to decode contract data: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
