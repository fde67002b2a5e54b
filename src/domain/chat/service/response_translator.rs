use chrono::Utc;
use uuid::Uuid;

use crate::domain::chat::dto::backend_chat::BackendChatResponse;
use crate::domain::chat::dto::chat_completion_request::ChatCompletionRequest;
use crate::domain::chat::dto::chat_completion_response::{
    ChatCompletionChoice, ChatCompletionResponse, CompletionMessage, Usage, DEFAULT_REPLY_ROLE,
};

pub const COMPLETION_ID_PREFIX: &str = "chatcmpl-";
const CHARS_PER_TOKEN: usize = 4;

/// Build the OpenAI response for a successful backend reply.
///
/// `model` is echoed from the caller's request, not from the backend. The reply
/// role is copied as sent, and only a missing role becomes `"assistant"`.
/// `finish_reason` is always `"stop"`: the backend's own truncation signal is
/// not propagated, and usage is a character-count estimate, not a tokenizer
/// count.
pub fn translate_response(
    request: &ChatCompletionRequest,
    backend: BackendChatResponse,
) -> ChatCompletionResponse {
    let reply = backend.message.unwrap_or_default();
    let message = CompletionMessage {
        role: reply.role.unwrap_or_else(|| DEFAULT_REPLY_ROLE.to_string()),
        content: reply.content.unwrap_or_default(),
    };

    let prompt_chars: usize = request
        .messages
        .iter()
        .map(|m| m.content.chars().count())
        .sum();
    let usage = Usage::new(
        estimate_tokens(prompt_chars),
        estimate_tokens(message.content.chars().count()),
    );

    ChatCompletionResponse {
        id: format!("{}{}", COMPLETION_ID_PREFIX, Uuid::new_v4()),
        object: "chat.completion".to_string(),
        created: Utc::now().timestamp(),
        model: request.model.clone(),
        choices: vec![ChatCompletionChoice {
            index: 0,
            message,
            finish_reason: "stop".to_string(),
        }],
        usage,
    }
}

/// Four characters per token, rounded down.
pub fn estimate_tokens(chars: usize) -> u32 {
    u32::try_from(chars / CHARS_PER_TOKEN).unwrap_or(u32::MAX)
}
