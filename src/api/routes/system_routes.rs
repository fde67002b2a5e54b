use axum::{routing::get, Router};

use crate::api::controller::system::SystemController;
use crate::app_state::AppState;
use crate::routes::handler_405;

pub fn system_routes() -> Router<AppState> {
    Router::new().route("/health", get(SystemController::health).fallback(handler_405))
}
