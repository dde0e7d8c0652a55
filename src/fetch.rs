//! Retrieval of the raw `stats.json` body.

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot retrieve HTTP data: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error code received: {reason} ({code})")]
    Status { code: u16, reason: String },

    #[error("cannot read body text: {0}")]
    Body(#[source] reqwest::Error),
}

/// Issues GET requests against the receiver's statistics endpoint.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    url: Url,
}

impl Fetcher {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the full response body.
    ///
    /// Anything but `200 OK` is an error. The response is dropped on every
    /// return path, which hands the connection back to the pool.
    pub async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let resp = self.client.get(self.url.clone()).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = resp.bytes().await.map_err(FetchError::Body)?;
        log::debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body.to_vec())
    }
}
