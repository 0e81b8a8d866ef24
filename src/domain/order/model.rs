//! Order domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::Resource;

/// Order lifecycle status. Every order starts as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A placed order. Immutable once created.
///
/// `total_amount` is derived as `quantity * unit_price` in exact decimal
/// arithmetic and is never independently settable.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    /// Human-readable code, `ORD-` + 8 alphanumeric chars.
    pub order_number: String,
    /// Not cross-validated against the user store.
    pub customer_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Resource for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────
