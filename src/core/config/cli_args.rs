use clap::Parser;

/// Command-line flags. Each one overrides the matching environment variable.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ollama-openai-gateway", version, about = "OpenAI-compatible chat API in front of a local Ollama")]
pub struct CliArgs {
    /// Extra API token to accept, in addition to API_TOKENS
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Ollama API base URL (default: http://localhost:11434)
    #[arg(long = "ollama-api")]
    pub ollama_api: Option<String>,

    /// Host to bind (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default: 8000)
    #[arg(short = 'p', long)]
    pub port: Option<u16>,
}
