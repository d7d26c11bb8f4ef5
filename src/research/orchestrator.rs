// Research orchestrator - main entry points
//
// question -> 3 generated queries -> per-query fan-out (search + summaries)
//          -> aggregated research summary -> long-form report

use futures_util::future::join_all;
use std::sync::Arc;
use uuid::Uuid;

use super::aggregator::aggregate;
use super::prompts::build_report_messages;
use super::query_generator::generate_queries;
use super::searcher::QuestionResearcher;
use super::summarizer::Summarizer;
use crate::config::AssistantConfig;
use crate::error::Result;
use crate::llm::LlmClient;
use crate::models::ResearchInput;
use crate::web::{PageFetcher, SearchClient};

/// Tunables for one assistant instance
#[derive(Debug, Clone, Copy)]
pub struct ResearchSettings {
    pub num_results: usize,
    pub max_page_chars: usize,
}

impl Default for ResearchSettings {
    fn default() -> Self {
        Self {
            num_results: crate::web::DEFAULT_NUM_RESULTS,
            max_page_chars: super::summarizer::MAX_PAGE_CHARS,
        }
    }
}

impl From<&AssistantConfig> for ResearchSettings {
    fn from(config: &AssistantConfig) -> Self {
        Self {
            num_results: config.search.num_results,
            max_page_chars: config.fetch.max_page_chars,
        }
    }
}

/// The report pipeline with its collaborators injected
#[derive(Clone)]
pub struct ResearchAssistant {
    llm: Arc<dyn LlmClient>,
    researcher: QuestionResearcher,
}

impl ResearchAssistant {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        search: Arc<dyn SearchClient>,
        fetcher: Arc<dyn PageFetcher>,
        settings: ResearchSettings,
    ) -> Self {
        let summarizer = Summarizer::new(llm.clone(), fetcher, settings.max_page_chars);
        let researcher = QuestionResearcher::new(search, summarizer, settings.num_results);
        Self { llm, researcher }
    }

    /// Generate queries for `question` and research each one in parallel.
    ///
    /// Returns one group of summaries per generated query, in query order.
    pub async fn research(&self, question: &str) -> Result<Vec<Vec<String>>> {
        let queries = generate_queries(&self.llm, question).await?;

        let handles: Vec<_> = queries
            .into_iter()
            .map(|query| {
                let researcher = self.researcher.clone();
                tokio::spawn(async move { researcher.research(&ResearchInput::new(query)).await })
            })
            .collect();

        let results = join_all(handles).await;

        let mut groups = Vec::with_capacity(results.len());
        for result in results {
            groups.push(result??);
        }
        Ok(groups)
    }

    /// Run the full pipeline and return the report text
    pub async fn run(&self, input: &ResearchInput) -> Result<String> {
        let run_id = Uuid::new_v4();
        self.run_with_id(run_id, input).await
    }

    /// Same as [`run`](Self::run) with a caller-chosen run id for log correlation
    pub async fn run_with_id(&self, run_id: Uuid, input: &ResearchInput) -> Result<String> {
        log::info!("[research] Run {} started: {}", run_id, input.question);

        let groups = self.research(&input.question).await?;
        let research_summary = aggregate(&groups);
        log::info!(
            "[research] Run {} aggregated {} summaries ({} chars)",
            run_id,
            groups.iter().map(Vec::len).sum::<usize>(),
            research_summary.chars().count()
        );

        let messages = build_report_messages(&input.question, &research_summary);
        let report = self.llm.complete(&messages).await?;

        log::info!("[research] Run {} completed ({} chars)", run_id, report.chars().count());
        Ok(report)
    }
}
