//! System controller: liveness endpoint

use axum::Json;
use serde_json::Value;

use crate::api::util::json::to_json;
use crate::domain::system::service::health_service;
use crate::errors::AppError;

pub struct SystemController;

impl SystemController {
    pub async fn health() -> Result<Json<Value>, AppError> {
        to_json(health_service::health().await)
    }
}
