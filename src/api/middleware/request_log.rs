use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;

/// Same ceiling axum applies to `Json` bodies by default.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const MAX_LOGGED_BODY: usize = 1024;

/// Per-request span with id, method and path; logs status and latency on the way out.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!("http_request", %request_id, %method, %path);

    async move {
        info!("request started");

        let (parts, body) = req.into_parts();
        let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
            Ok(b) => b,
            Err(e) => {
                let err = e.into_inner();
                let app_error = if err.is::<LengthLimitError>() {
                    AppError::PayloadTooLarge(MAX_BODY_BYTES)
                } else {
                    AppError::BodyParsingError(format!("unreadable request body: {}", err))
                };
                let response = app_error.into_response();
                warn!(status = response.status().as_u16(), "request body rejected");
                return response;
            }
        };
        log_body(&parts.headers, &bytes);

        let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;
        if status >= 500 {
            error!(status, latency_ms, "request failed");
        } else if status >= 400 {
            warn!(status, latency_ms, "request rejected");
        } else {
            info!(status, latency_ms, "request completed");
        }

        response
    }
    .instrument(span)
    .await
}

fn log_body(headers: &header::HeaderMap, bytes: &Bytes) {
    if bytes.is_empty() {
        return;
    }
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    match std::str::from_utf8(bytes) {
        Ok(text) if is_json && bytes.len() <= MAX_LOGGED_BODY => debug!(body = %text, "request body"),
        _ => debug!(size = bytes.len(), "request body [skipped]"),
    }
}
