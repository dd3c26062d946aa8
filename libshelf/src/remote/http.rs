//! HTTP implementation of the remote board

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::RemoteError;
use crate::remote::{Remote, RemoteResult};
use crate::types::{Item, ItemDraft};

/// Request timeout for all board calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote backed by a JSON REST endpoint
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    /// Create a remote against the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: &str) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RemoteError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a remote from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> RemoteResult<Self> {
        Self::new(&config.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a reqwest failure onto the remote error taxonomy
    fn request_error(e: reqwest::Error) -> RemoteError {
        if e.is_decode() {
            RemoteError::Decode(e.to_string())
        } else if e.is_timeout() {
            RemoteError::Transport(format!("request timed out: {}", e))
        } else {
            RemoteError::Transport(e.to_string())
        }
    }

    /// Reject non-2xx responses, capturing the status and body
    async fn check_status(response: reqwest::Response) -> RemoteResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Remote for HttpRemote {
    async fn fetch_all(&self) -> RemoteResult<Vec<Item>> {
        let url = self.url("/posts");
        debug!(%url, "fetching item collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::request_error)?;

        let items = Self::check_status(response)
            .await?
            .json::<Vec<Item>>()
            .await
            .map_err(Self::request_error)?;

        debug!(count = items.len(), "fetched item collection");
        Ok(items)
    }

    async fn create(&self, draft: &ItemDraft) -> RemoteResult<Item> {
        let url = self.url("/posts");
        debug!(%url, title = %draft.title, "creating item");

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::check_status(response)
            .await?
            .json::<Item>()
            .await
            .map_err(Self::request_error)
    }

    async fn update(&self, item: &Item) -> RemoteResult<Item> {
        let url = self.url(&format!("/posts/{}", item.id));
        debug!(%url, id = item.id, "updating item");

        let response = self
            .client
            .put(&url)
            .json(item)
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::check_status(response)
            .await?
            .json::<Item>()
            .await
            .map_err(Self::request_error)
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        let url = self.url(&format!("/posts/{}", id));
        debug!(%url, id, "deleting item");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::check_status(response).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}
