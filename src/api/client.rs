//! HTTP client for the restaurant search endpoint.
//!
//! Wraps `reqwest` with base-URL handling, query encoding and decoding of the
//! `{ "businesses": [...] }` envelope. Every failure is logged and surfaced as
//! [`TableScoutError::Fetch`]; nothing is retried here.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::error::{Result, TableScoutError};
use crate::domain::{Business, Page, SearchQuery};
use crate::Config;

/// The remote search capability.
///
/// Implemented by [`SearchClient`] for the real endpoint. The pagination logic
/// only ever sees this trait, so tests can substitute a scripted source.
pub trait SearchApi: Send + Sync {
    /// Fetches the page of results starting at `offset`.
    fn search(
        &self,
        query: &SearchQuery,
        offset: usize,
    ) -> impl Future<Output = Result<Page>> + Send;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

/// Client for `GET {base}/search?term&location&offset`.
///
/// Use [`SearchClient::new`] with the application config, or
/// [`SearchClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: Url,
}

impl SearchClient {
    /// Creates a client from the configured base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TableScoutError::Config`] if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.api_base_url, config.request_timeout_secs)
    }

    /// Creates a client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TableScoutError::Config`] if `base_url` does not parse or the
    /// HTTP client cannot be built.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("tablescout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TableScoutError::Config(format!("failed to build HTTP client: {e}")))?;

        // Exactly one trailing slash, so joining "search" appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| TableScoutError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    fn build_url(&self, query: &SearchQuery, offset: usize) -> Result<Url> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| TableScoutError::Config(format!("invalid search URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("term", query.term())
            .append_pair("location", query.location())
            .append_pair("offset", &offset.to_string());
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<Vec<Business>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| TableScoutError::Fetch(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| TableScoutError::Fetch(e.to_string()))?;

        let envelope: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| TableScoutError::Fetch(format!("unexpected response body: {e}")))?;

        Ok(envelope.businesses)
    }
}

impl SearchApi for SearchClient {
    #[tracing::instrument(
        level = "debug",
        skip(self, query),
        fields(term = %query.term(), location = %query.location())
    )]
    async fn search(&self, query: &SearchQuery, offset: usize) -> Result<Page> {
        let url = self.build_url(query, offset)?;

        match self.fetch(url).await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "search page received");
                Ok(Page { offset, items })
            }
            Err(e) => {
                tracing::error!(error = %e, "API error");
                Err(e)
            }
        }
    }
}
