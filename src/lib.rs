// Clippy allows for reasonable defaults
#![allow(clippy::new_without_default)] // Builders with no meaningful default
#![allow(clippy::redundant_closure)] // |x| f(x) can be clearer than f

// Module declarations
pub mod config;
pub mod error;
pub mod llm;
mod models;
pub mod research;
pub mod shutdown;
mod utils;
pub mod web;

// Server module (HTTP API)
pub mod server;

// Re-export models for use by the server and binaries
pub use error::{ResearchError, Result};
pub use models::*;
pub use utils::truncate_chars;

use std::sync::Arc;

use config::AssistantConfig;
use llm::ChatCompletionsClient;
use research::{ResearchAssistant, ResearchSettings};
use web::{DuckDuckGoSearch, HttpPageFetcher};

/// Wire the production collaborators (chat completions API, DuckDuckGo,
/// plain HTTP fetching) into a [`ResearchAssistant`].
pub fn build_assistant(config: &AssistantConfig, api_key: String) -> Result<ResearchAssistant> {
    let http = reqwest::Client::builder()
        .user_agent(config.fetch.user_agent.clone())
        .build()
        .map_err(|e| ResearchError::Config(format!("Failed to build HTTP client: {}", e)))?;

    let fetcher = HttpPageFetcher::from_config(&config.fetch)
        .map_err(|e| ResearchError::Config(format!("Failed to build page fetcher: {}", e)))?;

    let llm = ChatCompletionsClient::new(http.clone(), api_key, &config.llm);
    log::info!("[research] Using model {} at {}", llm.model(), config.llm.base_url);

    Ok(ResearchAssistant::new(
        Arc::new(llm),
        Arc::new(DuckDuckGoSearch::new(http)),
        Arc::new(fetcher),
        ResearchSettings::from(config),
    ))
}
