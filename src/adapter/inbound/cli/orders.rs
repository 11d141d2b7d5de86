//! Handlers for `swapkeeper orders`.

use alloy_primitives::{Address, U256};
use tabled::{Table, Tabled};
use tracing::info;

use crate::adapter::inbound::cli::command::{Cli, CreateOrderArgs, ListOrdersArgs};
use crate::adapter::inbound::cli::{load_config, output};
use crate::domain::id::OrderId;
use crate::domain::network::NetworkProfile;
use crate::domain::order::{NewOrder, Order};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::port::outbound::swapper::{OrderAdmin, OrderSource};

/// 100 units of a 6-decimal stablecoin.
pub const DEFAULT_SOURCE_AMOUNT: u64 = 100_000_000;

/// 0.0625 of an 18-decimal token.
pub const DEFAULT_DESIRED_OUTPUT: u64 = 62_500_000_000_000_000;

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: OrderId,
    #[tabled(rename = "Maker")]
    maker: Address,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Desired output")]
    desired: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            maker: order.maker,
            source: format!("{} of {}", order.source_amount, order.source_token),
            desired: format!("{} of {}", order.desired_output, order.destination_token),
            status: order.status.to_string(),
        }
    }
}

/// List active orders.
pub async fn execute_list(cli: &Cli, args: &ListOrdersArgs) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let client = bootstrap::connect_swapper(&config).await?;
    let orders = client.list_active_orders().await?;

    if args.json {
        return output::json(&orders);
    }

    output::section("Active Orders");
    if orders.is_empty() {
        output::note("No active orders");
        return Ok(());
    }
    let rows: Vec<OrderRow> = orders.iter().map(OrderRow::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}

/// Show one order.
pub async fn execute_show(cli: &Cli, id: OrderId) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let client = bootstrap::connect_swapper(&config).await?;
    let order = client.get_order(id).await?;

    output::section(&format!("Order {}", order.id));
    output::field("Status", order.status);
    output::field("Maker", order.maker);
    output::field("Receiver", order.receiver);
    output::field("Source token", order.source_token);
    output::field("Source amount", order.source_amount);
    output::field("Dest. token", order.destination_token);
    output::field("Desired output", order.desired_output);
    Ok(())
}

/// Fill in omitted creation parameters.
///
/// Tokens default to the first ones the network profile allows, the
/// receiver to the signer, and amounts to 100 USDC for 0.0625 ETH.
#[allow(clippy::result_large_err)]
pub fn resolve_new_order(
    args: &CreateOrderArgs,
    profile: Option<&NetworkProfile>,
    signer: Address,
) -> Result<NewOrder> {
    let source_token = args
        .source_token
        .or_else(|| profile.and_then(NetworkProfile::default_source_token))
        .ok_or(ConfigError::MissingField {
            field: "source_token",
        })?;
    let destination_token = args
        .destination_token
        .or_else(|| profile.and_then(NetworkProfile::default_destination_token))
        .ok_or(ConfigError::MissingField {
            field: "destination_token",
        })?;

    Ok(NewOrder {
        source_token,
        destination_token,
        receiver: args.receiver.unwrap_or(signer),
        source_amount: args
            .amount_of_source_token
            .unwrap_or(U256::from(DEFAULT_SOURCE_AMOUNT)),
        desired_output: args
            .amount_of_destination_token
            .unwrap_or(U256::from(DEFAULT_DESIRED_OUTPUT)),
    })
}

/// Create a limit order.
pub async fn execute_create(cli: &Cli, args: &CreateOrderArgs) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let client = bootstrap::connect_swapper(&config).await?;
    let new_order = resolve_new_order(args, config.network.profile(), client.signer_address())?;
    let id = client.create_order(&new_order).await?;
    let active = client.list_active_orders().await?;
    info!(order_id = %id, active_orders = active.len(), "Active orders after creation");

    output::ok(&format!("Created order {id}"));
    output::field("Receiver", new_order.receiver);
    output::field("Source amount", new_order.source_amount);
    output::field("Desired output", new_order.desired_output);
    Ok(())
}

/// Cancel an order.
pub async fn execute_cancel(cli: &Cli, id: OrderId) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let client = bootstrap::connect_swapper(&config).await?;
    let confirmation = client.cancel_order(id).await?;

    output::ok(&format!("Canceled order {id}"));
    output::field("Transaction", &confirmation.tx_hash);
    if let Some(block) = confirmation.block_number {
        output::field("Block", block);
    }
    Ok(())
}
