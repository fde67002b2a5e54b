use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Reject requests whose bearer token is not configured, before the body is
/// read or any backend call is made.
pub async fn require_bearer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = state.tokens().authorize(header) {
        warn!(path = %req.uri().path(), has_header = header.is_some(), "rejected credential");
        return Err(e);
    }

    Ok(next.run(req).await)
}
