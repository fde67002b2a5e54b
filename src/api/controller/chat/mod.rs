use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::chat::dto::chat_completion_request::ChatCompletionRequest;
use crate::domain::chat::dto::chat_completion_response::ChatCompletionResponse;
use crate::domain::chat::service::chat_completion_service;
use crate::errors::AppError;

pub struct ChatController;

impl ChatController {
    pub async fn create_chat_completion(
        State(state): State<AppState>,
        payload: Result<Json<ChatCompletionRequest>, JsonRejection>,
    ) -> Result<Json<ChatCompletionResponse>, AppError> {
        let Json(request) = payload.map_err(|e| AppError::BodyParsingError(e.body_text()))?;

        chat_completion_service::create_chat_completion(state.backend.as_ref(), request)
            .await
            .map(Json)
    }
}
