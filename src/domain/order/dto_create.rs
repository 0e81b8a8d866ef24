use rust_decimal::Decimal;

/// Raw order placement input, validated by the order flow.
///
/// `quantity` is signed so that a negative value reaches validation and
/// is rejected with a reason instead of failing to deserialize.
#[derive(Debug, Clone)]
pub struct CreateOrderDto {
    pub customer_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}
