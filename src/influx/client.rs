use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};

use super::{Point, PointWriter, WriteError};
use crate::config::InfluxConfig;

/// Writes points through the InfluxDB v2 `/api/v2/write` endpoint.
///
/// The underlying HTTP client keeps its connection pool, so one instance is
/// created at startup and shared by every poll cycle.
#[derive(Clone)]
pub struct InfluxClient {
    client: Client,
    write_url: Url,
    token: String,
}

impl InfluxClient {
    pub fn new(client: Client, config: &InfluxConfig) -> Self {
        Self {
            client,
            write_url: write_url(config),
            token: config.token.clone(),
        }
    }

    pub fn write_url(&self) -> &Url {
        &self.write_url
    }
}

#[async_trait]
impl PointWriter for InfluxClient {
    async fn write(&self, point: &Point) -> Result<(), WriteError> {
        let line = point.to_line_protocol()?;
        log::trace!("Writing line: {}", line);

        let mut request = self
            .client
            .post(self.write_url.clone())
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(line);
        if !self.token.is_empty() {
            request = request.header(AUTHORIZATION, format!("Token {}", self.token));
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WriteError::Rejected { status, body });
        }
        Ok(())
    }
}

fn write_url(config: &InfluxConfig) -> Url {
    let mut url = config.url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["api", "v2", "write"]);
    }
    {
        let mut query = url.query_pairs_mut();
        if !config.org.is_empty() {
            query.append_pair("org", &config.org);
        }
        query.append_pair("bucket", &config.bucket);
        query.append_pair("precision", "ns");
    }
    url
}
