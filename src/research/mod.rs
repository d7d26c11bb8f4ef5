// Research pipeline
//
// This module is organized into submodules:
// - orchestrator: Report pipeline and the composite fan-out over generated queries
// - searcher: Per-question fan-out (search + one summary per result)
// - summarizer: Fetch, truncate and summarize a single page
// - query_generator: LLM-generated search queries
// - aggregator: Flatten grouped summaries into one research summary
// - prompts: Prompt templates for each stage

mod aggregator;
mod orchestrator;
mod prompts;
mod query_generator;
mod searcher;
mod summarizer;

#[cfg(test)]
mod testing;

pub use aggregator::aggregate;
pub use orchestrator::{ResearchAssistant, ResearchSettings};
pub use prompts::{build_report_messages, build_search_queries_messages};
pub use query_generator::{generate_queries, parse_queries, QUERY_COUNT};
pub use searcher::QuestionResearcher;
pub use summarizer::{build_summary_prompt, Summarizer, MAX_PAGE_CHARS};
