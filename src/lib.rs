//! OpenAI-compatible chat-completion gateway in front of a local Ollama service.
//!
//! Inbound `POST /v1/chat/completions` requests are authenticated against a
//! fixed set of bearer tokens, translated to Ollama's `/api/chat` schema,
//! forwarded once, and the reply is translated back into a `chat.completion`
//! object.

pub mod api;
pub mod app_state;
pub mod core;
pub mod domain;
pub mod errors;
pub mod routes;
