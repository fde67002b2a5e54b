//! Wire types for the Ollama `/api/chat` endpoint.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::chat_completion_request::ChatMessage;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendOptions {
    pub temperature: f32,
    pub top_p: f32,
    /// Token limit; mirrors `max_tokens`. Ollama reads -1 as unlimited and -2 as fill context.
    pub num_predict: Option<i64>,
    pub stop: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: BackendOptions,
}

/// Reply message. The role is kept verbatim; models with tool support may
/// answer with roles outside system/user/assistant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Only `message` is read; `done`, `eval_count`, timings etc. are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendChatResponse {
    #[serde(default)]
    pub message: Option<BackendMessage>,
}

/// Model listing returned by `/api/tags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendTagsResponse {
    #[serde(default)]
    pub models: Vec<BackendModelTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendModelTag {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_options_are_not_serialized() {
        let options = BackendOptions {
            temperature: 0.7,
            top_p: 1.0,
            num_predict: None,
            stop: None,
        };
        let value = serde_json::to_value(&options).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("num_predict"));
        assert!(!obj.contains_key("stop"));
        assert_eq!(obj.len(), 2);
    }

    #[test]
    fn ollama_reply_with_extra_fields_parses() {
        let resp: BackendChatResponse = serde_json::from_value(json!({
            "model": "llama2",
            "created_at": "2024-01-01T00:00:00Z",
            "message": {"role": "assistant", "content": "Hello!"},
            "done": true,
            "eval_count": 3
        }))
        .unwrap();

        let message = resp.message.unwrap();
        assert_eq!(message.role.as_deref(), Some("assistant"));
        assert_eq!(message.content.as_deref(), Some("Hello!"));
    }

    #[test]
    fn reply_role_outside_the_request_roles_parses() {
        for role in ["tool", ""] {
            let resp: BackendChatResponse = serde_json::from_value(json!({
                "message": {"role": role, "content": "x"}
            }))
            .unwrap();
            assert_eq!(resp.message.unwrap().role.as_deref(), Some(role));
        }
    }

    #[test]
    fn negative_num_predict_is_serialized() {
        let options = BackendOptions {
            temperature: 0.7,
            top_p: 1.0,
            num_predict: Some(-1),
            stop: None,
        };
        assert_eq!(serde_json::to_value(&options).unwrap()["num_predict"], -1);
    }

    #[test]
    fn reply_without_message_parses_to_none() {
        let resp: BackendChatResponse = serde_json::from_value(json!({"done": true})).unwrap();
        assert!(resp.message.is_none());
    }
}
