// Per-question fan-out: search, then summarize every result in parallel

use futures_util::future::join_all;
use std::sync::Arc;

use super::summarizer::Summarizer;
use crate::error::Result;
use crate::models::{ResearchInput, SummaryRequest};
use crate::web::SearchClient;

/// Search one question and summarize each result page
#[derive(Clone)]
pub struct QuestionResearcher {
    search: Arc<dyn SearchClient>,
    summarizer: Summarizer,
    num_results: usize,
}

impl QuestionResearcher {
    pub fn new(search: Arc<dyn SearchClient>, summarizer: Summarizer, num_results: usize) -> Self {
        Self {
            search,
            summarizer,
            num_results,
        }
    }

    /// Summaries come back in search-result order regardless of which page
    /// finishes first. The first failed summary fails the whole question.
    pub async fn research(&self, input: &ResearchInput) -> Result<Vec<String>> {
        let urls = self.search.search(&input.question, self.num_results).await?;
        let requests = SummaryRequest::for_urls(&input.question, urls);

        log::debug!(
            "[research] Summarizing {} page(s) for '{}'",
            requests.len(),
            input.question
        );

        let handles: Vec<_> = requests
            .into_iter()
            .map(|request| {
                let summarizer = self.summarizer.clone();
                tokio::spawn(async move { summarizer.summarize(&request).await })
            })
            .collect();

        // Wait for all pages to complete
        let results = join_all(handles).await;

        let mut summaries = Vec::with_capacity(results.len());
        for result in results {
            summaries.push(result??);
        }
        Ok(summaries)
    }
}
