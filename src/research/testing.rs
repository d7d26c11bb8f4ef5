// Stub collaborators for pipeline unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::{ResearchError, Result};
use crate::llm::{ChatMessage, LlmClient};
use crate::web::{PageContent, PageFetcher, SearchClient};

/// Returns the content of the last message it was sent
pub struct EchoLlm;

#[async_trait]
impl LlmClient for EchoLlm {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        Ok(messages.last().map(|m| m.content.clone()).unwrap_or_default())
    }
}

/// Answers query-generation prompts with `queries_json` and every other
/// prompt with `reply`; counts calls
pub struct ScriptedLlm {
    pub queries_json: String,
    pub reply: String,
    pub calls: AtomicUsize,
}

impl ScriptedLlm {
    pub fn new(queries_json: &str, reply: &str) -> Self {
        Self {
            queries_json: queries_json.to_string(),
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        if prompt.starts_with("Write 3 google search queries") {
            Ok(self.queries_json.clone())
        } else {
            Ok(self.reply.clone())
        }
    }
}

/// Always fails
pub struct FailingLlm;

#[async_trait]
impl LlmClient for FailingLlm {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
        Err(ResearchError::Llm("API error (503): unavailable".to_string()))
    }
}

/// Replies with the page text (the prompt's first line) after a per-page
/// delay, so completion order can differ from request order. Query
/// generation prompts get `queries_json`.
pub struct DelayedEchoLlm {
    pub queries_json: String,
    pub delays_ms: HashMap<String, u64>,
}

impl DelayedEchoLlm {
    pub fn new(queries_json: &str, delays_ms: &[(&str, u64)]) -> Self {
        Self {
            queries_json: queries_json.to_string(),
            delays_ms: delays_ms
                .iter()
                .map(|(page, ms)| (page.to_string(), *ms))
                .collect(),
        }
    }
}

#[async_trait]
impl LlmClient for DelayedEchoLlm {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        if prompt.starts_with("Write 3 google search queries") {
            return Ok(self.queries_json.clone());
        }
        let page = prompt.lines().next().unwrap_or("").to_string();
        if let Some(ms) = self.delays_ms.get(&page) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        Ok(page)
    }
}

pub enum StaticFetcher {
    Text(String),
    Unavailable(String),
    EchoUrl,
}

impl StaticFetcher {
    pub fn text(text: &str) -> Self {
        StaticFetcher::Text(text.to_string())
    }

    pub fn unavailable(reason: &str) -> Self {
        StaticFetcher::Unavailable(reason.to_string())
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> PageContent {
        match self {
            StaticFetcher::Text(text) => PageContent::Text(text.clone()),
            StaticFetcher::Unavailable(reason) => PageContent::Unavailable {
                url: url.to_string(),
                reason: reason.clone(),
            },
            StaticFetcher::EchoUrl => PageContent::Text(url.to_string()),
        }
    }
}

/// Returns `{query}-1 .. {query}-n` style URLs, or a fixed list
pub enum StubSearch {
    Fixed(Vec<String>),
    PerQuery,
    Failing,
}

#[async_trait]
impl SearchClient for StubSearch {
    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<String>> {
        match self {
            StubSearch::Fixed(urls) => Ok(urls.iter().take(num_results).cloned().collect()),
            StubSearch::PerQuery => Ok((1..=num_results)
                .map(|i| format!("https://{}.example/{}", query.replace(' ', "-"), i))
                .collect()),
            StubSearch::Failing => Err(ResearchError::Search {
                query: query.to_string(),
                message: "HTTP 429 Too Many Requests".to_string(),
            }),
        }
    }
}
