//! Order aggregate
//!
//! Contains the Order entity, its status enumeration and create DTO.

pub mod model;

mod dto_create;

pub use dto_create::CreateOrderDto;
pub use model::{Order, OrderStatus};
