//! Order request DTOs
//!
//! Fields default so an absent or zero field reaches validation (and a
//! 400 with a reason) instead of failing to deserialize.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::CreateOrderDto;

/// Create order request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
}

impl From<CreateOrderRequest> for CreateOrderDto {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            customer_id: request.customer_id,
            product_name: request.product_name,
            quantity: request.quantity,
            unit_price: request.unit_price,
        }
    }
}
