use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use radioboy_server::agent::{CompletionOptions, LlmProvider, OpenAiProvider};
use radioboy_server::chat::ChatAgent;
use radioboy_server::enrichment::{DeezerClient, DEEZER_API_BASE};
use radioboy_server::mailing_list::MailingList;
use radioboy_server::session::SessionStore;
use radioboy_server::{run_server, InMemorySessionStore, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, default_value_t = 8080)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Base URL of the OpenAI-compatible generation backend.
    #[clap(long, default_value = "https://api.openai.com/v1")]
    pub llm_base_url: String,

    /// Model to request from the generation backend.
    #[clap(long, default_value = "gpt-4o-mini")]
    pub llm_model: String,

    /// Sampling temperature for generation.
    #[clap(long, default_value_t = 0.8)]
    pub temperature: f32,

    /// Timeout in seconds for generation requests.
    #[clap(long, default_value_t = 60)]
    pub llm_timeout_sec: u64,

    /// Base URL of the track catalog service.
    #[clap(long, default_value = DEEZER_API_BASE)]
    pub catalog_base_url: String,

    /// Timeout in seconds for catalog lookups.
    #[clap(long, default_value_t = 10)]
    pub catalog_timeout_sec: u64,

    /// Replay prior session history to the model on each turn.
    #[clap(long)]
    pub history_context: bool,

    /// Origin allowed to call the API with credentials. Repeatable.
    #[clap(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let api_key = std::env::var("OPENAI_API_KEY").ok();
    if api_key.is_none() {
        warn!("OPENAI_API_KEY not set, generation requests will be unauthenticated");
    }

    let llm = Arc::new(OpenAiProvider::new(
        cli_args.llm_base_url,
        cli_args.llm_model,
        api_key,
    ));

    info!(
        "Using generation backend {} with model {}",
        llm.name(),
        llm.model()
    );
    if let Err(err) = llm.health_check().await {
        warn!(error = %err, "Generation backend health check failed, continuing anyway");
    }

    let catalog = Arc::new(DeezerClient::new(
        cli_args.catalog_base_url,
        cli_args.catalog_timeout_sec,
    ));

    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let mailing_list = Arc::new(MailingList::new());

    let options = CompletionOptions {
        temperature: cli_args.temperature,
        max_tokens: None,
        timeout: Duration::from_secs(cli_args.llm_timeout_sec),
    };

    let chat_agent = Arc::new(ChatAgent::new(
        llm,
        catalog,
        sessions.clone(),
        options,
        cli_args.history_context,
    ));

    let allowed_origins = if cli_args.allowed_origins.is_empty() {
        ServerConfig::default().allowed_origins
    } else {
        cli_args.allowed_origins
    };

    let config = ServerConfig {
        requests_logging_level: cli_args.logging_level,
        port: cli_args.port,
        frontend_dir_path: cli_args.frontend_dir_path,
        allowed_origins,
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(config, chat_agent, sessions, mailing_list).await
}
