//! HTTP route handlers.
//!
//! Paths are matched by exact string equality: no wildcards and no
//! trailing-slash normalization. Unknown paths fall through to a plain-text
//! 404, and a known path requested with the wrong method gets axum's 405.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{http::Uri, middleware, routing::get, Router};

use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Fallback for any path without a route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
