//! ollama-openai-gateway – entry point.
//!
//! Startup order:
//! 1. Load `.env`, parse CLI flags, build and validate the configuration.
//! 2. Initialise tracing (console + rolling `api.log`).
//! 3. Ask the backend for its available models (informational only).
//! 4. Serve the Axum router until Ctrl-C / SIGTERM.

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use ollama_openai_gateway::app_state::build_app_state;
use ollama_openai_gateway::core::config::cli_args::CliArgs;
use ollama_openai_gateway::core::config::gateway_config::GatewayConfig;
use ollama_openai_gateway::core::logging::init_tracing;
use ollama_openai_gateway::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment and defaults still apply.
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let args = CliArgs::parse();
    let mut config = GatewayConfig::from_env()?;
    config.apply_cli(args);
    config.check()?;

    let _log_guard = init_tracing(&config.log_dir)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        dotenv_loaded,
        backend = %config.backend_base_url,
        tokens = config.api_tokens.len(),
        "gateway starting"
    );

    let state = build_app_state(config.clone())?;

    match state.backend.list_models().await {
        Ok(models) if models.is_empty() => {
            warn!("backend is running but has no models; pull one with `ollama pull llama2`")
        }
        Ok(models) => info!(?models, "backend models available"),
        Err(e) => warn!(error = %e, "backend not reachable at startup; requests will fail until it is"),
    }

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "HTTP server listening");

    if let Some(token) = config.api_tokens.primary() {
        info!(
            "example: curl -X POST http://localhost:{}/v1/chat/completions \
             -H 'Content-Type: application/json' -H 'Authorization: Bearer {}' \
             -d '{{\"model\":\"llama2\",\"messages\":[{{\"role\":\"user\",\"content\":\"Hello\"}}]}}'",
            config.port,
            token
        );
    }

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

/// Resolves on SIGINT (Ctrl-C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
