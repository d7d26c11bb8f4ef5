use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use research_assistant_lib::config::{AssistantConfig, CliOverrides, ConfigMerger};
use research_assistant_lib::server::{self, ServerAppState};
use research_assistant_lib::shutdown::{register_signal_handlers, ShutdownState};

/// Research Assistant - search, scrape and summarize the web into long-form reports
#[derive(Parser, Debug)]
#[command(name = "research-assistant")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to bind the server to (default 8000)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind the server to (default 0.0.0.0)
    #[arg(long)]
    bind: Option<String>,

    /// Config file (defaults to ~/.research-assistant/config.toml when present)
    #[arg(long, env = "RESEARCH_ASSISTANT_CONFIG")]
    config: Option<PathBuf>,

    /// LLM model identifier
    #[arg(long)]
    model: Option<String>,

    /// Search results fetched per generated query
    #[arg(long)]
    num_results: Option<usize>,

    /// Allowed CORS origins, comma separated (default: any)
    #[arg(long, value_delimiter = ',')]
    cors_origins: Option<Vec<String>>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind: self.bind.clone(),
            port: self.port,
            model: self.model.clone(),
            num_results: self.num_results,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let file_config = AssistantConfig::load(cli.config.as_deref())?;
    let config = ConfigMerger::new()
        .with_file(Some(file_config))
        .with_cli(Some(cli.overrides()))
        .merge();

    let api_key = config.api_key()?;

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    rt.block_on(async {
        let assistant = research_assistant_lib::build_assistant(&config, api_key)
            .context("Failed to initialize research assistant")?;

        let shutdown_state = ShutdownState::new();
        if let Err(e) = register_signal_handlers(shutdown_state.clone()) {
            log::warn!("Failed to register signal handlers: {}", e);
        }

        let state = ServerAppState::new(assistant, shutdown_state);

        server::run_server(&config.server, state)
            .await
            .map_err(|e| anyhow!(e))
    })
}
