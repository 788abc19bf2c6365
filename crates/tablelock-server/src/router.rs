//! Router assembly for the tablelock HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! panic recovery, CORS and tracing middleware layers.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Prefix shared by all table lock routes.
pub const API_BASE: &str = "/api/tables";

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. A panicking handler is
/// answered with the standard 500 body instead of dropping the connection.
pub fn build_router(state: AppState) -> Router {
    let tables = Router::new()
        .route("/lock", post(handlers::tables::lock_table))
        .route("/unlock", post(handlers::tables::unlock_table))
        .route("/locks", get(handlers::tables::list_locks))
        .route("/{resource_id}/status", get(handlers::tables::table_status));

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest(API_BASE, tables)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    ApiError::InternalError(detail).into_response()
}
