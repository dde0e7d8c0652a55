//! One poll cycle: fetch, parse, publish.

use std::sync::Arc;

use thiserror::Error;

use crate::fetch::{FetchError, Fetcher};
use crate::influx::{PointWriter, WriteError};
use crate::publish::publish;
use crate::stats::{parse_stats, ParseError};

/// A failed poll cycle, by stage.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("fetch stage failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse stage failed: {0}")]
    Parse(#[from] ParseError),

    #[error("publish stage failed: {0}")]
    Publish(#[from] WriteError),
}

/// Owns the long-lived clients used by every cycle.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Fetcher,
    writer: Arc<dyn PointWriter>,
}

impl Pipeline {
    pub fn new(fetcher: Fetcher, writer: Arc<dyn PointWriter>) -> Self {
        Self { fetcher, writer }
    }

    /// Run one cycle and return the number of points written.
    pub async fn run_cycle(&self) -> Result<usize, CycleError> {
        let body = self.fetcher.fetch().await?;
        let payload = parse_stats(&body)?;
        let written = publish(&payload, self.writer.as_ref()).await?;
        Ok(written)
    }

    /// Run one cycle, logging the outcome instead of returning it.
    pub async fn run_logged(self: Arc<Self>) {
        match self.run_cycle().await {
            Ok(written) => log::info!("Published {} point(s) from {}", written, self.fetcher.url()),
            Err(e) => log::error!("Poll cycle abandoned: {}", e),
        }
    }
}
