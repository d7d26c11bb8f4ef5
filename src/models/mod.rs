// Request records passed between pipeline stages

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input of the research pipeline and of the per-question fan-out.
///
/// At the top level `question` is the user's question; inside the composite
/// fan-out it carries one generated search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResearchInput {
    pub question: String,
}

impl ResearchInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// One page to summarize against a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub question: String,
    pub url: String,
}

impl SummaryRequest {
    /// Build one request per search result URL, keeping result order
    pub fn for_urls(question: &str, urls: Vec<String>) -> Vec<Self> {
        urls.into_iter()
            .map(|url| SummaryRequest {
                question: question.to_string(),
                url,
            })
            .collect()
    }
}
