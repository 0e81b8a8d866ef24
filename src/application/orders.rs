//! Order placement flow

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{ResourceFlow, ResourceService};
use crate::domain::{CreateOrderDto, DomainError, DomainResult, Order, OrderStatus};
use crate::shared::{codes, format, validate};

/// Fixed literal prefix for human-readable order numbers.
const ORDER_NUMBER_PREFIX: &str = "ORD-";

/// Length of the random alphanumeric part of an order number.
const ORDER_CODE_LENGTH: usize = 8;

/// Formatted order projection returned to callers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderView {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    pub product_name: String,
    pub quantity: String,
    pub unit_price: String,
    pub total_amount: String,
    pub created_at: String,
    pub status: String,
}

/// Validation, assembly and projection rules for orders.
pub struct OrderFlow;

impl ResourceFlow for OrderFlow {
    type Entity = Order;
    type CreateRequest = CreateOrderDto;
    type View = OrderView;

    fn validate(request: &CreateOrderDto) -> DomainResult<()> {
        if !validate::is_not_empty(&request.customer_id) {
            return Err(DomainError::Validation("Customer ID is required".into()));
        }
        if !validate::is_not_empty(&request.product_name) {
            return Err(DomainError::Validation("Product name is required".into()));
        }
        if request.quantity <= 0 {
            return Err(DomainError::Validation(
                "Quantity must be greater than 0".into(),
            ));
        }
        if request.unit_price <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "Unit price must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    fn assemble(request: CreateOrderDto) -> Order {
        // exact decimal arithmetic, no float drift
        let total_amount = Decimal::from(request.quantity) * request.unit_price;
        Order {
            id: codes::new_id(),
            order_number: format!(
                "{}{}",
                ORDER_NUMBER_PREFIX,
                codes::alphanumeric_code(ORDER_CODE_LENGTH)
            ),
            customer_id: request.customer_id,
            product_name: request.product_name,
            quantity: request.quantity,
            unit_price: request.unit_price,
            total_amount,
            created_at: Utc::now(),
            status: OrderStatus::default(),
        }
    }

    fn project(order: &Order) -> OrderView {
        OrderView {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            customer_id: order.customer_id.clone(),
            product_name: order.product_name.clone(),
            quantity: format::integer(order.quantity),
            unit_price: format::currency(order.unit_price),
            total_amount: format::currency(order.total_amount),
            created_at: format::instant(Some(order.created_at)),
            status: order.status.to_string(),
        }
    }
}

/// Order service over the in-memory store.
pub type OrderService = ResourceService<OrderFlow>;

// ── Tests ──────────────────────────────────────────────────────
