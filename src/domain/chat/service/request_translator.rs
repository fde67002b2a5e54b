use crate::domain::chat::dto::backend_chat::{BackendChatRequest, BackendOptions};
use crate::domain::chat::dto::chat_completion_request::{
    ChatCompletionRequest, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
};

/// Map an OpenAI chat request onto the Ollama `/api/chat` body.
///
/// Streaming is never forwarded: the backend is always asked for a single
/// complete reply. `n`, `presence_penalty`, `frequency_penalty` and `user`
/// have no backend counterpart and are dropped here.
pub fn translate_request(request: &ChatCompletionRequest) -> BackendChatRequest {
    BackendChatRequest {
        model: request.model.clone(),
        messages: request.messages.clone(),
        stream: false,
        options: BackendOptions {
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            top_p: request.top_p.unwrap_or(DEFAULT_TOP_P),
            num_predict: request.max_tokens,
            stop: request.stop.clone().map(|s| s.into_vec()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::dto::chat_completion_request::{ChatMessage, ChatRole, StopSequences};

    fn base_request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "llama2".into(),
            messages: vec![
                ChatMessage::new(ChatRole::System, "You are helpful."),
                ChatMessage::new(ChatRole::User, "Hi"),
                ChatMessage::new(ChatRole::Assistant, ""),
                ChatMessage::new(ChatRole::User, "again"),
            ],
            temperature: None,
            top_p: None,
            n: None,
            max_tokens: None,
            stream: None,
            stop: None,
            presence_penalty: None,
            frequency_penalty: None,
            user: None,
        }
    }

    #[test]
    fn copies_model_and_messages_in_order() {
        let req = base_request();
        let out = translate_request(&req);

        assert_eq!(out.model, "llama2");
        assert_eq!(out.messages, req.messages);
        // empty content is passed through untouched
        assert_eq!(out.messages[2].content, "");
    }

    #[test]
    fn stream_is_always_false() {
        for flag in [None, Some(false), Some(true)] {
            let mut req = base_request();
            req.stream = flag;
            assert!(!translate_request(&req).stream);
        }
    }

    #[test]
    fn sampling_defaults_apply_when_absent() {
        let out = translate_request(&base_request());
        assert_eq!(out.options.temperature, 0.7);
        assert_eq!(out.options.top_p, 1.0);
    }

    #[test]
    fn explicit_sampling_values_are_copied() {
        let mut req = base_request();
        req.temperature = Some(0.0);
        req.top_p = Some(0.9);

        let out = translate_request(&req);
        assert_eq!(out.options.temperature, 0.0);
        assert_eq!(out.options.top_p, 0.9);
    }

    #[test]
    fn max_tokens_maps_to_num_predict() {
        let mut req = base_request();
        req.max_tokens = Some(256);
        assert_eq!(translate_request(&req).options.num_predict, Some(256));
    }

    #[test]
    fn ollama_sentinel_limits_are_forwarded() {
        let mut req = base_request();
        for limit in [-1, -2] {
            req.max_tokens = Some(limit);
            assert_eq!(translate_request(&req).options.num_predict, Some(limit));
        }
    }

    #[test]
    fn absent_max_tokens_omits_the_key() {
        let out = translate_request(&base_request());
        let json = serde_json::to_value(&out).unwrap();

        assert!(out.options.num_predict.is_none());
        assert!(json["options"].get("num_predict").is_none());
        assert!(json["options"].get("stop").is_none());
    }

    #[test]
    fn single_stop_becomes_one_element_list() {
        let mut req = base_request();
        req.stop = Some(StopSequences::Single("END".into()));
        assert_eq!(
            translate_request(&req).options.stop,
            Some(vec!["END".to_string()])
        );
    }

    #[test]
    fn stop_list_is_passed_through() {
        let mut req = base_request();
        req.stop = Some(StopSequences::Multiple(vec!["a".into(), "b".into()]));
        assert_eq!(
            translate_request(&req).options.stop,
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn compatibility_only_fields_do_not_reach_the_backend() {
        let mut req = base_request();
        req.n = Some(3);
        req.presence_penalty = Some(1.0);
        req.frequency_penalty = Some(1.0);
        req.user = Some("alice".into());

        let json = serde_json::to_value(translate_request(&req)).unwrap();
        let text = json.to_string();
        for key in ["\"n\"", "presence_penalty", "frequency_penalty", "\"user\":"] {
            assert!(!text.contains(key), "{key} leaked into {text}");
        }
    }
}
