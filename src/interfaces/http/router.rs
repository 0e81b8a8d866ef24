//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{OrderService, OrderView, UserService, UserView};

use super::modules::{health, orders, users};

/// Unified state for every route. Axum extracts the specific handler
/// state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub user_service: Arc<UserService>,
    pub order_service: Arc<OrderService>,
    pub started_at: Arc<Instant>,
}

impl ApiState {
    pub fn new(user_service: Arc<UserService>, order_service: Arc<OrderService>) -> Self {
        Self {
            user_service,
            order_service,
            started_at: Arc::new(Instant::now()),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for users::UserHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        users::UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<ApiState> for orders::OrderHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        orders::OrderHandlerState {
            order_service: Arc::clone(&s.order_service),
        }
    }
}

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        health::HealthState {
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        // Orders
        orders::list_orders,
        orders::get_order,
        orders::create_order,
    ),
    components(
        schemas(
            users::CreateUserRequest,
            orders::CreateOrderRequest,
            UserView,
            OrderView,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "User registration and lookup"),
        (name = "Orders", description = "Order placement and lookup"),
    ),
    info(
        title = "Pasar Commerce API",
        version = "1.0.0",
        description = "REST API for user registration and order placement",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: ApiState) -> Router {
    // CORS configuration: the storefront UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Users
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/users/{id}", get(users::get_user))
        // Orders
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/{id}", get(orders::get_order))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
