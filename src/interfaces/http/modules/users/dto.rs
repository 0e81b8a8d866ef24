//! User request DTOs
//!
//! Fields default to the empty string so an absent field reaches
//! validation (and a 400 with a reason) instead of failing to
//! deserialize.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::CreateUserDto;

/// Create user request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
        }
    }
}
