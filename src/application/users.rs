//! User registration flow

use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{ResourceFlow, ResourceService};
use crate::domain::{CreateUserDto, DomainError, DomainResult, User};
use crate::shared::{codes, format, validate};

/// Formatted user projection returned to callers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Validation, assembly and projection rules for users.
pub struct UserFlow;

impl ResourceFlow for UserFlow {
    type Entity = User;
    type CreateRequest = CreateUserDto;
    type View = UserView;

    fn validate(request: &CreateUserDto) -> DomainResult<()> {
        if !validate::is_not_empty(&request.name) {
            return Err(DomainError::Validation("Name is required".into()));
        }
        if !validate::is_valid_email(&request.email) {
            return Err(DomainError::Validation("Invalid email format".into()));
        }
        if !validate::is_valid_phone(&request.phone) {
            return Err(DomainError::Validation("Invalid phone format".into()));
        }
        Ok(())
    }

    fn assemble(request: CreateUserDto) -> User {
        // created_at == updated_at at creation, stamped once
        let now = Utc::now();
        User {
            id: codes::new_id(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            created_at: now,
            updated_at: now,
        }
    }

    fn project(user: &User) -> UserView {
        UserView {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            created_at: format::instant(Some(user.created_at)),
            updated_at: format::instant(Some(user.updated_at)),
        }
    }
}

/// User service over the in-memory store.
pub type UserService = ResourceService<UserFlow>;

// ── Tests ──────────────────────────────────────────────────────
