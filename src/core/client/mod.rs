//! Outbound HTTP clients

pub mod ollama_client;
