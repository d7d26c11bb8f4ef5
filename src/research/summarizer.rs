// Summarize one page against one question

use std::sync::Arc;

use super::prompts::build_summary_messages;
use crate::error::Result;
use crate::llm::{ChatMessage, LlmClient};
use crate::models::SummaryRequest;
use crate::utils::truncate_chars;
use crate::web::PageFetcher;

/// Characters of page text embedded in a summary prompt
pub const MAX_PAGE_CHARS: usize = 10_000;

/// Build the summary prompt, keeping only the first `max_chars` characters
/// of the page text
pub fn build_summary_prompt(question: &str, page_text: &str, max_chars: usize) -> Vec<ChatMessage> {
    build_summary_messages(question, truncate_chars(page_text, max_chars))
}

/// Fetch -> truncate -> prompt -> LLM
#[derive(Clone)]
pub struct Summarizer {
    llm: Arc<dyn LlmClient>,
    fetcher: Arc<dyn PageFetcher>,
    max_page_chars: usize,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn LlmClient>, fetcher: Arc<dyn PageFetcher>, max_page_chars: usize) -> Self {
        Self {
            llm,
            fetcher,
            max_page_chars,
        }
    }

    pub async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        let page = self.fetcher.fetch(&request.url).await;
        if !page.is_available() {
            log::debug!("[research] Summarizing fetch failure for {}", request.url);
        }
        let text = page.into_text();

        let messages = build_summary_prompt(&request.question, &text, self.max_page_chars);
        self.llm.complete(&messages).await
    }
}
