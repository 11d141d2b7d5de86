//! Command-line interface definitions.
//!
//! Defines the CLI structure for the keeper using `clap`: the scheduled
//! loop, one-shot evaluation, direct execution, order administration and
//! wallet utilities.

use std::path::PathBuf;

use alloy_primitives::{Address, U256};
use clap::{Args, Parser, Subcommand};

use crate::domain::id::OrderId;

/// Limit-order keeper for LimitSwapper contracts
#[derive(Parser, Debug)]
#[command(name = "swapkeeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate active orders on a schedule (foreground)
    Run(RunArgs),

    /// Evaluate active orders once and print the outcomes
    Evaluate(EvaluateArgs),

    /// Execute listed orders directly, without simulation
    Execute(ExecuteArgs),

    /// Inspect and manage limit orders
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Wallet utilities
    #[command(subcommand)]
    Wallet(WalletCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override seconds between runs
    #[arg(long)]
    pub interval: Option<u64>,

    /// Override slippage tolerance in whole percent (0-100)
    #[arg(long)]
    pub tolerance: Option<u8>,

    /// Stop after this many runs
    #[arg(long)]
    pub max_runs: Option<u64>,

    /// Run a single evaluation and exit
    #[arg(long, conflicts_with = "max_runs")]
    pub once: bool,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Override slippage tolerance in whole percent (0-100)
    #[arg(long)]
    pub tolerance: Option<u8>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `execute` subcommand.
#[derive(Args, Debug)]
pub struct ExecuteArgs {
    /// Order id to execute (repeatable)
    #[arg(long = "order", value_name = "ID")]
    pub orders: Vec<OrderId>,

    /// JSON trigger payload file with `{"orderIds": [..]}`
    #[arg(long)]
    pub payload: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Subcommands for `swapkeeper orders`.
#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    /// List active orders
    List(ListOrdersArgs),
    /// Show one order in any status
    Show {
        /// Order id
        id: OrderId,
    },
    /// Create a limit order
    Create(CreateOrderArgs),
    /// Cancel an order (maker only)
    Cancel {
        /// Order id
        id: OrderId,
    },
}

/// Arguments for `orders list`.
#[derive(Args, Debug)]
pub struct ListOrdersArgs {
    /// Print orders as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `orders create`.
///
/// Omitted tokens default to the network's first allowed tokens and the
/// receiver defaults to the signer.
#[derive(Args, Debug)]
pub struct CreateOrderArgs {
    /// Source token address
    #[arg(long)]
    pub source_token: Option<Address>,

    /// Destination token address
    #[arg(long)]
    pub destination_token: Option<Address>,

    /// Receiver of the destination token
    #[arg(long)]
    pub receiver: Option<Address>,

    /// Amount of source token in base units (default: 100 USDC)
    #[arg(long)]
    pub amount_of_source_token: Option<U256>,

    /// Desired amount of destination token in base units (default: 0.0625 ETH)
    #[arg(long)]
    pub amount_of_destination_token: Option<U256>,
}

/// Subcommands for `swapkeeper wallet`.
#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// Show the address derived from the private key
    Address,
    /// Sign a message to prove address ownership
    Sign {
        /// Message to sign
        message: String,
    },
}

/// Subcommands for `swapkeeper check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config,
}
