// Page fetching
//
// A fetch never fails from the caller's point of view: transport and body
// errors are carried as `PageContent::Unavailable` and flattened into text
// before prompting.

use async_trait::async_trait;
use std::time::Duration;

use super::extract::html_to_text;
use crate::config::FetchConfig;

/// Outcome of fetching one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// Extracted visible text
    Text(String),
    /// The page could not be retrieved
    Unavailable { url: String, reason: String },
}

impl PageContent {
    pub fn is_available(&self) -> bool {
        matches!(self, PageContent::Text(_))
    }

    /// Flatten to the text embedded in the summary prompt
    pub fn into_text(self) -> String {
        match self {
            PageContent::Text(text) => text,
            PageContent::Unavailable { url, reason } => {
                format!("Failed to retrieve content from {}, error: {}", url, reason)
            }
        }
    }
}

/// Retrieves the visible text of a web page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> PageContent;
}

/// Plain HTTP GET fetcher
pub struct HttpPageFetcher {
    http: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Build a fetcher with its own client configured from `config`
    pub fn from_config(config: &FetchConfig) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::new(builder.build()?))
    }

    async fn fetch_markup(&self, url: &str) -> reqwest::Result<String> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("[fetch] {} returned {}, extracting body anyway", url, status);
        }
        response.text().await
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> PageContent {
        match self.fetch_markup(url).await {
            Ok(markup) => {
                let text = html_to_text(&markup);
                log::debug!("[fetch] {} -> {} chars", url, text.chars().count());
                PageContent::Text(text)
            }
            Err(e) => {
                log::warn!("[fetch] Failed to fetch {}: {}", url, e);
                PageContent::Unavailable {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
