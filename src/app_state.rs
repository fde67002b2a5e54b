use std::sync::Arc;

use anyhow::Result;

use crate::core::client::ollama_client::{InferenceBackend, OllamaClient};
use crate::core::config::gateway_config::GatewayConfig;
use crate::domain::auth::token_set::TokenSet;

/// Read-only state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub backend: Arc<dyn InferenceBackend>,
}

impl AppState {
    pub fn new(config: GatewayConfig, backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.config.api_tokens
    }
}

/// Wire the real Ollama client from configuration.
pub fn build_app_state(config: GatewayConfig) -> Result<AppState> {
    let backend = OllamaClient::new(&config.backend_base_url, config.upstream_timeout())?;
    Ok(AppState::new(config, Arc::new(backend)))
}
