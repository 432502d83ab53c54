//! HTTP client for the trademark search backend.
//!
//! One POST with a fixed query body; hits are pulled out of
//! `body.hits.hits` and anything missing along that path means "no hits".

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::types::Hit;

/// Path of the search endpoint, relative to the configured base URL.
pub const SEARCH_PATH: &str = "/api/api/v3/us";

// ---------------------------------------------------------------------------
// Request / error types
// ---------------------------------------------------------------------------

/// Body of the search request. `Default` is the fixed first-page query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub input_query: String,
    pub input_query_type: String,
    pub sort_by: String,
    pub status: Vec<String>,
    pub exact_match: bool,
    pub date_query: bool,
    pub owners: Vec<String>,
    pub attorneys: Vec<String>,
    pub law_firms: Vec<String>,
    pub mark_description_description: Vec<String>,
    pub classes: Vec<String>,
    pub page: u32,
    pub rows: u32,
    pub sort_order: String,
    pub states: Vec<String>,
    pub counties: Vec<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            input_query: "check".to_string(),
            input_query_type: String::new(),
            sort_by: "default".to_string(),
            status: Vec::new(),
            exact_match: false,
            date_query: false,
            owners: Vec::new(),
            attorneys: Vec::new(),
            law_firms: Vec::new(),
            mark_description_description: Vec::new(),
            classes: Vec::new(),
            page: 1,
            rows: 10,
            sort_order: "desc".to_string(),
            states: Vec::new(),
            counties: Vec::new(),
        }
    }
}

/// Why the initial load failed. The display string is what the error view shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Async client bound to one backend.
#[derive(Debug, Clone)]
pub struct TrademarkClient {
    base_url: String,
    client: reqwest::Client,
}

impl TrademarkClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// The one-shot load: the fixed first-page query.
    pub async fn fetch_hits(&self) -> Result<Vec<Hit>, FetchError> {
        self.search(&SearchRequest::default()).await
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Hit>, FetchError> {
        let url = self.endpoint();
        debug!(url = url.as_str(), "POST search");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Search request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let hits = extract_hits(&body);
        info!(count = hits.len(), "Fetched trademark hits");
        Ok(hits)
    }
}

/// Pull hits out of `body.hits.hits`. Any missing or mistyped segment yields
/// an empty list; elements that are not objects are skipped.
pub fn extract_hits(response: &Value) -> Vec<Hit> {
    let Some(items) = response
        .get("body")
        .and_then(|b| b.get("hits"))
        .and_then(|h| h.get("hits"))
        .and_then(Value::as_array)
    else {
        debug!("Response has no body.hits.hits, treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if !item.is_object() {
                warn!(index = idx, "Skipping non-object hit");
                return None;
            }
            match serde_json::from_value::<Hit>(item.clone()) {
                Ok(hit) => Some(hit),
                Err(e) => {
                    warn!(index = idx, "Skipping undecodable hit: {e}");
                    None
                }
            }
        })
        .collect()
}
