//! User registration API handlers
//!
//! Thin wrappers that delegate to the user service; all decision logic
//! lives in the application layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, warn};

use super::dto::CreateUserRequest;
use crate::application::{UserService, UserView};
use crate::domain::DomainError;

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserView),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), StatusCode> {
    match state.user_service.create(request.into()) {
        Ok(view) => Ok((StatusCode::CREATED, Json(view))),
        Err(e @ DomainError::Validation(_)) => {
            warn!("User rejected: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            error!("User creation failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "User list", body = [UserView])
    )
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> Json<Vec<UserView>> {
    Json(state.user_service.list_all())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserView),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, StatusCode> {
    state
        .user_service
        .get_by_id(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
