//! Web search backing the model's `web_search` tool.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::BoxFuture;
use crate::error::BedrockError;

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";
const DEFAULT_MAX_RESULTS: u32 = 5;

/// A search backend. Returns the results already formatted as text for the
/// model.
pub trait WebSearch: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<String, BedrockError>>;
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// [`WebSearch`] against the Tavily REST API.
pub struct TavilySearch {
    http: reqwest::Client,
    api_key: String,
    max_results: u32,
}

impl TavilySearch {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    async fn run(&self, query: &str) -> Result<String, BedrockError> {
        let response = self
            .http
            .post(TAVILY_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&TavilyRequest {
                query,
                max_results: self.max_results,
            })
            .send()
            .await
            .map_err(|e| BedrockError::Search(e.to_string()))?
            .error_for_status()
            .map_err(|e| BedrockError::Search(e.to_string()))?;

        let body: TavilyResponse = response
            .json()
            .await
            .map_err(|e| BedrockError::Search(e.to_string()))?;

        info!(query, results = body.results.len(), "web search complete");

        Ok(format_results(&body.results))
    }
}

impl WebSearch for TavilySearch {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<String, BedrockError>> {
        Box::pin(self.run(query))
    }
}

/// Format search hits as a numbered plain-text block.
pub fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("[{}] {}\n{}\n{}", i + 1, r.title, r.url, r.content.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
