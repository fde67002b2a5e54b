use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use crate::domain::chat::dto::backend_chat::{
    BackendChatRequest, BackendChatResponse, BackendTagsResponse,
};
use crate::errors::AppError;

/// The inference service the gateway forwards to.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// One chat call, no retries.
    async fn chat(&self, request: &BackendChatRequest) -> Result<BackendChatResponse, AppError>;

    /// Names of the models the backend has pulled.
    async fn list_models(&self) -> Result<Vec<String>>;
}

/// HTTP client for Ollama's native API.
///
/// Wraps a single pooled [`reqwest::Client`]; clones share the pool.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            error!(url, timeout_secs = self.timeout.as_secs(), "backend call timed out");
            AppError::UpstreamTimeout(self.timeout.as_secs())
        } else {
            error!(url, error = %err, "backend unreachable");
            AppError::UpstreamUnreachable(err.to_string())
        }
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn chat(&self, request: &BackendChatRequest) -> Result<BackendChatResponse, AppError> {
        let url = self.endpoint("/api/chat");
        debug!(url = %url, model = %request.model, "calling backend");

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        if status != StatusCode::OK {
            error!(status = status.as_u16(), body = %text, "backend API error");
            return Err(AppError::UpstreamError {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "failed to decode backend response");
            AppError::UpstreamMalformed(e.to_string())
        })
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = self.endpoint("/api/tags");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach backend (url={}): {}", url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("Backend returned {} (url={})", status, url));
        }

        let tags: BackendTagsResponse = resp
            .json()
            .await
            .map_err(|e| anyhow!("Failed to decode model list (url={}): {}", url, e))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}
