//! # Pasar Commerce
//!
//! User registration and order placement services over an in-memory
//! store, with a thin REST adapter.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities, create DTOs, the `Resource` trait and errors
//! - **application**: The generic resource service and the user/order flows
//! - **infrastructure**: In-memory storage
//! - **shared**: Stateless primitives: validation, code generation, formatting
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export the API router
pub use interfaces::http::{create_api_router, ApiState};
