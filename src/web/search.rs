// Web search returning result links only

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::error::{ResearchError, Result};

/// Result URLs requested per query unless configured otherwise
pub const DEFAULT_NUM_RESULTS: usize = 3;

const DUCKDUCKGO_HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// A web search provider
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Return up to `num_results` result links for `query`, in provider order
    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<String>>;
}

/// DuckDuckGo search through its HTML endpoint (no API key)
pub struct DuckDuckGoSearch {
    http: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoSearch {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: DUCKDUCKGO_HTML_URL.to_string(),
        }
    }

    /// Point the client at a different HTML endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchClient for DuckDuckGoSearch {
    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<String>> {
        let search_err = |message: String| ResearchError::Search {
            query: query.to_string(),
            message,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("q", query)])
            .header("Accept", "text/html")
            .send()
            .await
            .map_err(|e| search_err(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(search_err(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| search_err(format!("Failed to read response: {}", e)))?;

        let links = parse_duckduckgo_results(&body, num_results);
        log::info!("[search] '{}' -> {} result(s)", query, links.len());
        Ok(links)
    }
}

struct ResultSelectors {
    result: Selector,
    link: Selector,
}

fn selectors() -> &'static ResultSelectors {
    static SELECTORS: OnceLock<ResultSelectors> = OnceLock::new();
    SELECTORS.get_or_init(|| ResultSelectors {
        result: Selector::parse(".result").unwrap(),
        link: Selector::parse("a.result__a").unwrap(),
    })
}

/// Extract up to `max_results` organic result links from a DuckDuckGo HTML
/// results page. Sponsored results and non-http links are skipped.
pub fn parse_duckduckgo_results(html: &str, max_results: usize) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = selectors();

    doc.select(&sel.result)
        .filter(|result| !result.value().classes().any(|c| c == "result--ad"))
        .filter_map(|result| {
            result
                .select(&sel.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(decode_result_href)
        })
        .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
        .take(max_results)
        .collect()
}

/// DuckDuckGo wraps result links in redirects like
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
/// Return the percent-decoded destination, or the href unchanged.
fn decode_result_href(href: &str) -> String {
    if let Some(pos) = href.find("uddg=") {
        let start = pos + "uddg=".len();
        let end = href[start..]
            .find('&')
            .map(|i| start + i)
            .unwrap_or(href.len());
        let encoded = &href[start..end];
        if !encoded.is_empty() {
            return percent_decode_str(encoded).decode_utf8_lossy().into_owned();
        }
    }
    href.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
<html><body>
  <div class="result results_links result--ad">
    <a class="result__a" href="https://ads.example.com/buy">Sponsored</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fen.wikipedia.org%2Fwiki%2FParis&amp;rut=abc">Paris</a>
    <a class="result__snippet">Paris is the capital of France.</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a" href="https://www.britannica.com/place/Paris">Paris | Britannica</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a" href="/relative/link">Relative</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a" href="https://france.fr/en">France</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a" href="https://example.org/fourth">Fourth</a>
  </div>
</body></html>"#;

    #[test]
    fn test_parse_skips_ads_and_decodes_redirects() {
        let links = parse_duckduckgo_results(RESULTS_PAGE, 3);
        assert_eq!(
            links,
            vec![
                "https://en.wikipedia.org/wiki/Paris",
                "https://www.britannica.com/place/Paris",
                "https://france.fr/en",
            ]
        );
    }

    #[test]
    fn test_parse_respects_max_results() {
        assert_eq!(parse_duckduckgo_results(RESULTS_PAGE, 1).len(), 1);
        assert_eq!(parse_duckduckgo_results(RESULTS_PAGE, 10).len(), 4);
        assert!(parse_duckduckgo_results(RESULTS_PAGE, 0).is_empty());
    }

    #[test]
    fn test_parse_empty_page() {
        assert!(parse_duckduckgo_results("<html><body>No results.</body></html>", 3).is_empty());
    }

    #[test]
    fn test_decode_result_href() {
        assert_eq!(
            decode_result_href("//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc&rut=1"),
            "https://example.com/a?b=c"
        );
        assert_eq!(
            decode_result_href("https://example.com/plain"),
            "https://example.com/plain"
        );
        assert_eq!(decode_result_href("uddg="), "uddg=");
    }
}
