// Outbound web access: search and page fetching

mod extract;
mod fetch;
mod search;

pub use extract::html_to_text;
pub use fetch::{HttpPageFetcher, PageContent, PageFetcher};
pub use search::{parse_duckduckgo_results, DuckDuckGoSearch, SearchClient, DEFAULT_NUM_RESULTS};
