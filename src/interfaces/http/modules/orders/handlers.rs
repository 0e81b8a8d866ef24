//! Order placement API handlers
//!
//! Thin wrappers that delegate to the order service; all decision logic
//! lives in the application layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, warn};

use super::dto::CreateOrderRequest;
use crate::application::{OrderService, OrderView};
use crate::domain::DomainError;

/// Order handler state
#[derive(Clone)]
pub struct OrderHandlerState {
    pub order_service: Arc<OrderService>,
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderView),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_order(
    State(state): State<OrderHandlerState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderView>), StatusCode> {
    match state.order_service.create(request.into()) {
        Ok(view) => Ok((StatusCode::CREATED, Json(view))),
        Err(e @ DomainError::Validation(_)) => {
            warn!("Order rejected: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            error!("Order creation failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Order list", body = [OrderView])
    )
)]
pub async fn list_orders(State(state): State<OrderHandlerState>) -> Json<Vec<OrderView>> {
    Json(state.order_service.list_all())
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderView),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_order(
    State(state): State<OrderHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>, StatusCode> {
    state
        .order_service
        .get_by_id(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
