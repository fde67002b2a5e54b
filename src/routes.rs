use axum::{
    http::{Method, Uri},
    middleware, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::api::middleware::panic::handle_panic;
use crate::api::middleware::request_log::log_requests;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Health check, no auth
        .merge(crate::api::routes::system_routes::system_routes())
        // OpenAI-compatible API, bearer auth
        .nest("/v1", crate::api::routes::chat_routes::chat_routes(state.clone()))
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::very_permissive())
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

// Handler for 404 Not Found
async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Known path, wrong method. Installed per route with `MethodRouter::fallback`.
pub(crate) async fn handler_405(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
