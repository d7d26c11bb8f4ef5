// Error types for the research pipeline

use thiserror::Error;

/// Failures that abort a research run.
///
/// Page fetch failures are deliberately absent: the fetcher folds them
/// into the page text instead (see [`crate::web::PageContent`]).
#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("Search failed for '{query}': {message}")]
    Search { query: String, message: String },

    #[error("LLM request failed: {0}")]
    Llm(String),

    #[error("Failed to parse generated queries from {raw:?}: {source}")]
    QueryParse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Research task failed: {0}")]
    Task(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<tokio::task::JoinError> for ResearchError {
    fn from(e: tokio::task::JoinError) -> Self {
        ResearchError::Task(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ResearchError>;
