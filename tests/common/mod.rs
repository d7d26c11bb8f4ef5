// Shared stubs for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use research_assistant_lib::llm::{ChatMessage, LlmClient};
use research_assistant_lib::research::{ResearchAssistant, ResearchSettings};
use research_assistant_lib::web::{PageContent, PageFetcher, SearchClient};
use research_assistant_lib::{ResearchError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const QUERIES: &str = r#"["capital of France", "seat of French government", "Paris history"]"#;

/// Replies to query generation with `queries_json` and to everything else
/// with `reply`. Records every prompt it receives.
pub struct StubLlm {
    queries_json: String,
    reply: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<Vec<ChatMessage>>>,
}

impl StubLlm {
    pub fn new(queries_json: &str, reply: &str) -> Self {
        Self {
            queries_json: queries_json.to_string(),
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<Vec<ChatMessage>> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(messages.to_vec());

        let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        if prompt.starts_with("Write 3 google search queries") {
            Ok(self.queries_json.clone())
        } else {
            Ok(self.reply.clone())
        }
    }
}

pub struct FixedSearch(pub Vec<String>);

#[async_trait]
impl SearchClient for FixedSearch {
    async fn search(&self, _query: &str, num_results: usize) -> Result<Vec<String>> {
        Ok(self.0.iter().take(num_results).cloned().collect())
    }
}

pub struct FailingSearch;

#[async_trait]
impl SearchClient for FailingSearch {
    async fn search(&self, query: &str, _num_results: usize) -> Result<Vec<String>> {
        Err(ResearchError::Search {
            query: query.to_string(),
            message: "HTTP 503".to_string(),
        })
    }
}

pub struct StaticFetcher(pub String);

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> PageContent {
        PageContent::Text(self.0.clone())
    }
}

/// Assistant wired to one fixed search URL and a fixed page
pub fn stub_assistant(llm: Arc<StubLlm>, search: Arc<dyn SearchClient>) -> ResearchAssistant {
    ResearchAssistant::new(
        llm,
        search,
        Arc::new(StaticFetcher("Paris is the capital and largest city of France.".to_string())),
        ResearchSettings::default(),
    )
}

pub fn paris_search() -> Arc<dyn SearchClient> {
    Arc::new(FixedSearch(vec![
        "https://en.wikipedia.org/wiki/Paris".to_string()
    ]))
}
