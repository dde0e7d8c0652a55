//! Time-series store output.
//!
//! Points are written through the [`PointWriter`] trait. [`InfluxClient`]
//! implements it against the InfluxDB v2 HTTP write API.

mod client;
mod point;

pub use self::client::InfluxClient;
pub use self::point::FieldValue;
pub use self::point::LineBreakError;
pub use self::point::Point;

use async_trait::async_trait;
use thiserror::Error;

/// Writing a point to the time-series store failed.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot reach time-series store: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("cannot encode point: {0}")]
    InvalidPoint(#[from] LineBreakError),

    #[error("time-series store rejected write: {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A destination for time-series points.
///
/// Implementations are shared between poll cycles and must be safe to use
/// concurrently.
#[async_trait]
pub trait PointWriter: Send + Sync {
    /// Write one point, returning once the store acknowledged it.
    async fn write(&self, point: &Point) -> Result<(), WriteError>;
}
