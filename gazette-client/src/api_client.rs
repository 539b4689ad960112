//! REST client for the news collection endpoint.

use async_trait::async_trait;
use gazette_model::prelude::*;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use url::Url;

/// Errors surfaced by the news API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured server URL could not be parsed.
    #[error("invalid server url: {0}")]
    BadServerUrl(#[from] url::ParseError),

    /// Transport-level failure (connection, timeout, TLS, decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an unexpected status.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// HEAD response carried no ETag header.
    #[error("missing ETag header on HEAD response")]
    MissingEtag,
}

/// Operations the feed needs from the news server. Kept as a trait so the
/// feed, session, and refresh monitor can be exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetches one slice of the collection. `query` is the loader's
    /// `?limit=&offset=` string, possibly extended with filters.
    async fn list(&self, query: &str) -> Result<NewsPage, ApiError>;

    /// Fetches a single item, or None if it no longer exists.
    async fn get(&self, id: &NewsId) -> Result<Option<NewsItem>, ApiError>;

    /// Creates a new item; the server assigns id and creation time.
    async fn create(&self, draft: &NewsDraft) -> Result<NewsItem, ApiError>;

    /// Replaces an existing item.
    async fn update(&self, item: &NewsItem) -> Result<NewsItem, ApiError>;

    /// Deletes an item.
    async fn delete(&self, id: &NewsId) -> Result<(), ApiError>;

    /// Returns the collection ETag without fetching any items.
    async fn head_etag(&self) -> Result<String, ApiError>;
}

/// reqwest-backed [`NewsApi`] implementation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the given server, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        log::info!("[ApiClient] news API at {base_url}");

        Ok(Self { client, base_url })
    }

    /// Builds the collection URL with an optional `/id` suffix and an
    /// optional raw query string (already `?`-prefixed).
    fn news_url(&self, suffix: &str, query: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/api/news{suffix}{query}")
    }

    /// Maps non-success statuses to [`ApiError::Status`].
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

#[async_trait]
impl NewsApi for ApiClient {
    async fn list(&self, query: &str) -> Result<NewsPage, ApiError> {
        let url = self.news_url("", query);
        log::debug!("[ApiClient] GET {url}");
        let response = self.client.get(&url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get(&self, id: &NewsId) -> Result<Option<NewsItem>, ApiError> {
        let url = self.news_url(&format!("/{id}"), "");
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(response).await?.json().await?))
    }

    async fn create(&self, draft: &NewsDraft) -> Result<NewsItem, ApiError> {
        let url = self.news_url("", "");
        let response = self.client.post(&url).json(draft).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update(&self, item: &NewsItem) -> Result<NewsItem, ApiError> {
        let url = self.news_url(&format!("/{}", item.id), "");
        let response = self.client.put(&url).json(item).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, id: &NewsId) -> Result<(), ApiError> {
        let url = self.news_url(&format!("/{id}"), "");
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn head_etag(&self) -> Result<String, ApiError> {
        let url = self.news_url("", "");
        let response = self.client.head(&url).send().await?;
        let response = Self::check(response).await?;
        response
            .headers()
            .get(reqwest::header::ETAG)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim_matches('"').to_string())
            .ok_or(ApiError::MissingEtag)
    }
}
