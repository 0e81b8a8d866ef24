//! HTTP REST API interfaces
//!
//! - `modules`: per-resource request handlers and DTOs
//! - `router`: API router with Swagger documentation

pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiState};
