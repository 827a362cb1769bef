//! HTTP client for the demo collection endpoints.
//!
//! One request per call: no retries, no caching, no timeout configuration.
//! Callers decide whether to re-invoke.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::{FetchError, Result};
use super::models::{PageEnvelope, PagedResult, ResourceEnvelope};

/// Header carrying the static reqres API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Base URL plus static auth header for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: Url,
    api_key: Option<String>,
}

impl EndpointConfig {
    /// Parse and validate the base URL.
    pub fn new(base_url: &str) -> std::result::Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: None,
        })
    }

    /// Attach an `x-api-key` header to every request on this endpoint.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// `{base}/{id}` without doubling the separator.
    pub fn resource_url(&self, id: u64) -> String {
        format!("{}/{id}", self.base_url.as_str().trim_end_matches('/'))
    }
}

/// Thin wrapper over a shared `reqwest::Client`.
#[derive(Clone, Default)]
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// `GET {base}?page={n}` decoding the paged envelope.
    #[instrument(skip(self, endpoint), fields(url = %endpoint.base_url()))]
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointConfig,
        page: u32,
    ) -> Result<PagedResult<T>> {
        let request = self
            .http
            .get(endpoint.base_url().clone())
            .query(&[("page", page.max(1))]);
        let envelope: PageEnvelope<T> = self.send_json(request, endpoint).await?;
        debug!(
            page = envelope.page,
            total_pages = envelope.total_pages,
            items = envelope.data.len(),
            "Fetched page"
        );
        Ok(envelope.into())
    }

    /// `GET {base}` decoding a bare JSON array.
    #[instrument(skip(self, endpoint), fields(url = %endpoint.base_url()))]
    pub async fn fetch_all<T: DeserializeOwned>(&self, endpoint: &EndpointConfig) -> Result<Vec<T>> {
        let request = self.http.get(endpoint.base_url().clone());
        let items: Vec<T> = self.send_json(request, endpoint).await?;
        debug!(items = items.len(), "Fetched flat collection");
        Ok(items)
    }

    /// `GET {base}/{id}` decoding the `{ data }` envelope.
    #[instrument(skip(self, endpoint), fields(url = %endpoint.base_url()))]
    pub async fn fetch_one<T: DeserializeOwned>(&self, endpoint: &EndpointConfig, id: u64) -> Result<T> {
        let request = self.http.get(endpoint.resource_url(id));
        let envelope: ResourceEnvelope<T> = self.send_json(request, endpoint).await?;
        Ok(envelope.data)
    }

    async fn send_json<B: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &EndpointConfig,
    ) -> Result<B> {
        let request = match endpoint.api_key() {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        };

        let response = request.send().await.map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            warn!(status = status.as_u16(), %url, "Collection request failed");
            return Err(FetchError::http(status.as_u16(), url));
        }

        let bytes = response.bytes().await.map_err(FetchError::Network)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
