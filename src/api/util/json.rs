use anyhow::Result;
use axum::Json;

use crate::errors::{internal_error, AppError};

/// Map a domain `anyhow::Result` into a JSON response, surfacing failures as 500s.
pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) => Err(internal_error(err)), // preserves original error string
    }
}
