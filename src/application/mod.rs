pub mod orders;
pub mod service;
pub mod users;

pub use orders::{OrderService, OrderView};
pub use service::{ResourceFlow, ResourceService};
pub use users::{UserService, UserView};
