pub mod error;
pub mod order;
pub mod resource;
pub mod user;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use order::{CreateOrderDto, Order, OrderStatus};
pub use resource::Resource;
pub use user::{CreateUserDto, User};
