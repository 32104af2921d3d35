use std::str::FromStr;

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::error::SearchError;
use crate::models::{CodeSearchItem, CodeSearchPage};
use crate::query::SearchQuery;
use crate::Config;

/// Results per page; the maximum GitHub allows for code search.
const RESULTS_PER_PAGE: u32 = 100;

const API_VERSION: &str = "2022-11-28";

/// Client for the GitHub code search endpoint that walks every result page.
///
/// No retries and no rate-limit waits: quota headers are reported and any
/// failure is returned to the caller as-is.
pub struct GitHubSearcher {
    client: Client,
    token: String,
    api_url: String,
    max_page_limit: Option<u32>,
}

impl GitHubSearcher {
    /// Create a new GitHubSearcher from a resolved configuration
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubSearcher {
            client,
            token: config.token.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            max_page_limit: config.max_pages,
        })
    }

    /// Fetch every page for `query` and return the items in API order.
    pub async fn search_code(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<CodeSearchItem>, SearchError> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(Duration::from_millis(80));

        let result = self.paginate(query, &pb).await;
        pb.finish_and_clear();
        result
    }

    async fn paginate(
        &self,
        query: &SearchQuery,
        pb: &ProgressBar,
    ) -> Result<Vec<CodeSearchItem>, SearchError> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            if let Some(max_page) = self.max_page_limit {
                if page > max_page {
                    info!("Max page limit reached (limit: {})", max_page);
                    break;
                }
            }

            pb.set_message(format!("Searching '{}' - page {}", query, page));

            let Some(result) = self.search_page(query, page).await? else {
                break;
            };

            if result.incomplete_results {
                warn!("GitHub reported incomplete results for page {}", page);
            }
            if result.items.is_empty() {
                debug!("No more results after page {}", page - 1);
                break;
            }

            let total = result.total_count;
            items.extend(result.items);
            info!(
                "Fetched page {} ({} of {} results)",
                page,
                items.len(),
                total
            );

            if items.len() as u64 >= total {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    /// Fetch a single page. `None` means the API refused to go further.
    async fn search_page(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<Option<CodeSearchPage>, SearchError> {
        let url = format!(
            "{}/search/code?q={}&page={}&per_page={}",
            self.api_url,
            query.encoded(),
            page,
            RESULTS_PER_PAGE
        );

        debug!("Requesting URL: {}", url);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if let Some(rate_limit) = RateLimit::from_headers(response.headers()) {
            rate_limit.report();
        }

        // Past the first page a 422 means we ran off the searchable window.
        if status == StatusCode::UNPROCESSABLE_ENTITY && page > 1 {
            warn!("Reached search limit at page {}", page);
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(SearchError::Api {
                status,
                page,
                message: api_message(&body),
            });
        }

        Ok(Some(serde_json::from_str(&body)?))
    }
}

/// The `message` field of a GitHub error body, or the raw body.
fn api_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Quota state reported by the `X-RateLimit-*` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset: i64,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        Some(RateLimit {
            limit: header_value(headers, "x-ratelimit-limit")?,
            remaining: header_value(headers, "x-ratelimit-remaining")?,
            reset: header_value(headers, "x-ratelimit-reset")?,
        })
    }

    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }

    fn report(&self) {
        debug!("Rate limit: {}/{}", self.remaining, self.limit);
        if self.remaining == 0 {
            match self.reset_at() {
                Some(at) => warn!("Search rate limit exhausted, resets at {}", at.to_rfc3339()),
                None => warn!("Search rate limit exhausted"),
            }
        }
    }
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
