use axum::{http::StatusCode, response::IntoResponse, Json};
use http::header::WWW_AUTHENTICATE;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid authentication token")]
    Unauthorized,

    #[error("Invalid request body: {0}")]
    BodyParsingError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Backend unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Backend timed out after {0}s")]
    UpstreamTimeout(u64),

    /// Non-200 reply from the backend; the body is forwarded as-is and so is
    /// the status, unless it is not an error status.
    #[error("Backend API error: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Invalid upstream response: {0}")]
    UpstreamMalformed(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BodyParsingError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamError { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::UpstreamMalformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of `error.type` in the response envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "authentication_error",
            AppError::BodyParsingError(_) => "invalid_request_error",
            AppError::NotFound(_) => "not_found",
            AppError::MethodNotAllowed(_) => "method_not_allowed",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::UpstreamUnreachable(_) => "upstream_unreachable",
            AppError::UpstreamTimeout(_) => "upstream_timeout",
            AppError::UpstreamError { .. } => "upstream_error",
            AppError::UpstreamMalformed(_) => "upstream_malformed_response",
            AppError::InternalServerError(_) => "internal_server_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": self.kind(),
            }
        }));

        if matches!(self, AppError::Unauthorized) {
            return (status, [(WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status, body).into_response()
    }
}
