use std::time::Duration;

use anyhow::{bail, Context, Result};
use validator::Validate;

use crate::domain::auth::token_set::TokenSet;

use super::cli_args::CliArgs;

pub const DEFAULT_BACKEND_BASE: &str = "http://localhost:11434";
pub const DEFAULT_API_TOKENS: &str = "test-token";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Process-wide gateway configuration, immutable once built.
#[derive(Debug, Clone, Validate)]
pub struct GatewayConfig {
    /// Base URL of the Ollama service.
    #[validate(url)]
    pub backend_base_url: String,
    /// Bearer tokens accepted on `/v1/*`; must not be empty, see [`GatewayConfig::check`].
    pub api_tokens: TokenSet,
    pub host: String,
    pub port: u16,
    /// Upper bound for a single backend call.
    #[validate(range(min = 1))]
    pub upstream_timeout_secs: u64,
    /// Directory for the rolling `api.log`.
    #[validate(length(min = 1))]
    pub log_dir: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_BASE.into(),
            api_tokens: TokenSet::from_csv(DEFAULT_API_TOKENS),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            log_dir: DEFAULT_LOG_DIR.into(),
        }
    }
}

impl GatewayConfig {
    /// Read settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("OLLAMA_API_BASE") {
            cfg.backend_base_url = v.trim().to_string();
        }
        if let Some(v) = get("API_TOKENS") {
            cfg.api_tokens = TokenSet::from_csv(&v);
        }
        if let Some(v) = get("GATEWAY_HOST") {
            cfg.host = v.trim().to_string();
        }
        if let Some(v) = get("GATEWAY_PORT") {
            cfg.port = v
                .trim()
                .parse()
                .with_context(|| format!("GATEWAY_PORT is not a valid port: {}", v))?;
        }
        if let Some(v) = get("UPSTREAM_TIMEOUT_SECS") {
            cfg.upstream_timeout_secs = v
                .trim()
                .parse()
                .with_context(|| format!("UPSTREAM_TIMEOUT_SECS is not a number: {}", v))?;
        }
        if let Some(v) = get("GATEWAY_LOG_DIR") {
            cfg.log_dir = v.trim().to_string();
        }

        Ok(cfg)
    }

    /// Command-line flags win over the environment. `--token` adds to the set.
    pub fn apply_cli(&mut self, args: CliArgs) {
        if let Some(v) = args.token {
            let v = v.trim();
            if !v.is_empty() {
                self.api_tokens.insert(v.to_string());
            }
        }

        if let Some(v) = args.ollama_api {
            self.backend_base_url = v.trim().to_string();
        }

        if let Some(v) = args.host {
            self.host = v;
        }

        if let Some(v) = args.port {
            self.port = v;
        }
    }

    /// Field validation plus the non-empty token set.
    pub fn check(&self) -> Result<()> {
        self.validate().context("Invalid gateway configuration")?;
        if self.api_tokens.is_empty() {
            bail!("Invalid gateway configuration: no API tokens configured");
        }
        Ok(())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let cfg = GatewayConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(cfg.backend_base_url, "http://localhost:11434");
        assert_eq!(cfg.api_tokens.primary(), Some("test-token"));
        assert_eq!(cfg.bind_address(), "0.0.0.0:8000");
        assert_eq!(cfg.upstream_timeout(), Duration::from_secs(120));
        assert!(cfg.check().is_ok());
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = GatewayConfig::from_lookup(lookup(&[
            ("OLLAMA_API_BASE", "http://gpu-box:11434"),
            ("API_TOKENS", "alpha,beta"),
            ("GATEWAY_PORT", "9000"),
            ("UPSTREAM_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(cfg.backend_base_url, "http://gpu-box:11434");
        assert_eq!(cfg.api_tokens.primary(), Some("alpha"));
        assert!(cfg.api_tokens.contains("beta"));
        assert!(!cfg.api_tokens.contains("test-token"));
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.upstream_timeout_secs, 30);
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(GatewayConfig::from_lookup(lookup(&[("GATEWAY_PORT", "eighty")])).is_err());
    }

    #[test]
    fn cli_adds_token_and_overrides_bind() {
        let mut cfg = GatewayConfig::default();
        cfg.apply_cli(CliArgs {
            token: Some("cli-token".into()),
            ollama_api: Some("http://10.0.0.2:11434".into()),
            host: Some("127.0.0.1".into()),
            port: Some(8080),
        });

        assert!(cfg.api_tokens.contains("test-token"));
        assert!(cfg.api_tokens.contains("cli-token"));
        assert_eq!(cfg.api_tokens.primary(), Some("test-token"));
        assert_eq!(cfg.backend_base_url, "http://10.0.0.2:11434");
        assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut cfg = GatewayConfig::default();
        cfg.backend_base_url = "not a url".into();
        assert!(cfg.check().is_err());

        let mut cfg = GatewayConfig::default();
        cfg.api_tokens = TokenSet::from_csv(" , ");
        assert!(cfg.validate().is_ok());
        let err = cfg.check().unwrap_err();
        assert!(err.to_string().contains("no API tokens"));

        let mut cfg = GatewayConfig::default();
        cfg.upstream_timeout_secs = 0;
        assert!(cfg.check().is_err());
    }
}
