//! ABI bindings for the `LimitSwapper` contract.

use alloy_contract::Error as ContractError;
use alloy_primitives::U256;
use alloy_sol_types::sol;

use crate::domain::id::OrderId;
use crate::domain::order::{Order, OrderStatus};
use crate::error::ExecutionError;

sol! {
    #[sol(rpc)]
    interface ILimitSwapper {
        struct Order {
            uint256 id;
            address maker;
            address receiver;
            address sourceToken;
            address destinationToken;
            uint256 amountOfSourceToken;
            uint256 amountOfDestinationToken;
            uint8 status;
        }

        event OrderCreated(uint256 indexed orderId, address indexed maker);

        error LimitSwapperInvalidSourceToken();
        error LimitSwapperInvalidDestinationToken();
        error LimitSwapperOnlyMaker();
        error LimitSwapperOrderNotActive();

        function getActiveOrders() external view returns (Order[] memory);
        function getOrder(uint256 orderId) external view returns (Order memory);
        function createLimitOrder(
            address sourceToken,
            address destinationToken,
            address receiver,
            uint256 amountOfSourceToken,
            uint256 amountOfDestinationToken
        ) external returns (uint256);
        function cancelLimitOrder(uint256 orderId) external;
        function executeLimitOrder(uint256 orderId) external returns (uint256);
    }
}

/// Encode a domain id as the contract's `uint256`.
#[must_use]
pub fn order_id_to_u256(id: OrderId) -> U256 {
    U256::from(id.value())
}

/// Decode a contract `uint256` id.
///
/// # Errors
///
/// Returns [`ExecutionError::Decode`] for ids wider than 64 bits.
pub fn order_id_from_u256(raw: U256) -> Result<OrderId, ExecutionError> {
    u64::try_from(raw)
        .map(OrderId::new)
        .map_err(|_| ExecutionError::Decode(format!("order id {raw} does not fit in 64 bits")))
}

impl TryFrom<ILimitSwapper::Order> for Order {
    type Error = ExecutionError;

    fn try_from(raw: ILimitSwapper::Order) -> Result<Self, Self::Error> {
        let id = order_id_from_u256(raw.id)?;
        let status = OrderStatus::from_code(raw.status).ok_or_else(|| {
            ExecutionError::Decode(format!("order {id} has unknown status {}", raw.status))
        })?;

        Ok(Self {
            id,
            maker: raw.maker,
            receiver: raw.receiver,
            source_token: raw.sourceToken,
            destination_token: raw.destinationToken,
            source_amount: raw.amountOfSourceToken,
            desired_output: raw.amountOfDestinationToken,
            status,
        })
    }
}

/// Name of a decoded custom error.
#[must_use]
pub fn custom_error_name(error: &ILimitSwapper::ILimitSwapperErrors) -> &'static str {
    match error {
        ILimitSwapper::ILimitSwapperErrors::LimitSwapperInvalidSourceToken(_) => {
            "LimitSwapperInvalidSourceToken"
        }
        ILimitSwapper::ILimitSwapperErrors::LimitSwapperInvalidDestinationToken(_) => {
            "LimitSwapperInvalidDestinationToken"
        }
        ILimitSwapper::ILimitSwapperErrors::LimitSwapperOnlyMaker(_) => "LimitSwapperOnlyMaker",
        ILimitSwapper::ILimitSwapperErrors::LimitSwapperOrderNotActive(_) => {
            "LimitSwapperOrderNotActive"
        }
    }
}

/// Human-readable reason for a failed contract call, naming the custom
/// error when the revert data decodes to one.
#[must_use]
pub fn describe_error(error: &ContractError) -> String {
    match error.as_decoded_interface_error::<ILimitSwapper::ILimitSwapperErrors>() {
        Some(decoded) => format!("reverted with {}", custom_error_name(&decoded)),
        None => error.to_string(),
    }
}
