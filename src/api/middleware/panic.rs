use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::errors::internal_error;

/// Turn a handler panic into the standard 500 error envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %details, "unhandled panic in request handler");
    internal_error(details).into_response()
}
