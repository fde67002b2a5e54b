use tracing::{debug, info};

use crate::core::client::ollama_client::InferenceBackend;
use crate::domain::chat::dto::chat_completion_request::ChatCompletionRequest;
use crate::domain::chat::dto::chat_completion_response::ChatCompletionResponse;
use crate::errors::AppError;

use super::request_translator::translate_request;
use super::response_translator::translate_response;

/// Translate, call the backend once, translate back.
pub async fn create_chat_completion<B: InferenceBackend + ?Sized>(
    backend: &B,
    request: ChatCompletionRequest,
) -> Result<ChatCompletionResponse, AppError> {
    info!(model = %request.model, messages = request.messages.len(), "processing chat completion");
    if request.wants_stream() {
        debug!("stream=true requested; returning a single non-streamed completion");
    }

    let backend_request = translate_request(&request);
    let backend_response = backend.chat(&backend_request).await?;

    Ok(translate_response(&request, backend_response))
}
