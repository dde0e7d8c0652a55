use std::collections::HashMap;

use thiserror::Error;

use super::model::{StatsPayload, StatsRecord};

/// The body is not JSON, or does not have the `stats.json` shape.
#[derive(Debug, Error)]
#[error("cannot unmarshal json: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Decode a raw `stats.json` body.
///
/// Absent fields, and `null` windows or nested objects, decode as zero.
/// Present fields of the wrong type, or an `accepted` sequence shorter than
/// two entries, are errors.
pub fn parse_stats(body: &[u8]) -> Result<StatsPayload, ParseError> {
    let windows: HashMap<String, Option<StatsRecord>> = serde_json::from_slice(body)?;
    let payload: StatsPayload = windows
        .into_iter()
        .map(|(key, record)| (key, record.unwrap_or_default()))
        .collect();
    log::trace!("Decoded {} statistics window(s)", payload.len());
    Ok(payload)
}
