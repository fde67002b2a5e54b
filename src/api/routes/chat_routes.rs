//! OpenAI-compatible routes (/v1/*)

use axum::{middleware, routing::post, Router};

use crate::api::controller::chat::ChatController;
use crate::api::middleware::auth::require_bearer;
use crate::app_state::AppState;
use crate::routes::handler_405;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/chat/completions",
            post(ChatController::create_chat_completion).fallback(handler_405),
        )
        .route_layer(middleware::from_fn_with_state(state, require_bearer))
}
