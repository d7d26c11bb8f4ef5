// Generate search queries for a research question

use std::sync::Arc;

use super::prompts::build_search_queries_messages;
use crate::error::{ResearchError, Result};
use crate::llm::LlmClient;

/// Number of search queries requested from the model
pub const QUERY_COUNT: usize = 3;

/// Decode the model's reply as a JSON array of exactly three strings.
/// Anything else, including a valid array of another length, is an error.
pub fn parse_queries(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str::<[String; QUERY_COUNT]>(raw)
        .map(Vec::from)
        .map_err(|source| ResearchError::QueryParse {
            raw: raw.to_string(),
            source,
        })
}

/// Ask the model for objective search queries about `question`
pub async fn generate_queries(llm: &Arc<dyn LlmClient>, question: &str) -> Result<Vec<String>> {
    let messages = build_search_queries_messages(question);
    let raw = llm.complete(&messages).await?;
    let queries = parse_queries(&raw)?;
    log::info!("[research] Generated queries: {:?}", queries);
    Ok(queries)
}
