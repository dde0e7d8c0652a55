use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer};

use super::epoch;

/// Decoded `stats.json`, keyed by statistics window (`latest`, `last1min`,
/// `total`, ...).
pub type StatsPayload = HashMap<String, StatsRecord>;

/// One statistics window as reported by dump1090.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    #[serde(deserialize_with = "epoch::deserialize")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "epoch::deserialize")]
    pub end: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub local: LocalStats,
    #[serde(deserialize_with = "null_as_default")]
    pub remote: RemoteStats,
    #[serde(deserialize_with = "null_as_default")]
    pub cpr: CprStats,
    pub altitude_suppressed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tracks: TrackStats,
    pub messages: i64,
}

/// Counters for messages demodulated from the local SDR.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "LocalStatsWire")]
pub struct LocalStats {
    pub samples_processed: i64,
    pub samples_dropped: i64,
    pub modeac: i64,
    pub modes: i64,
    pub bad: i64,
    pub unknown_icao: i64,
    /// Accepted messages by number of corrected bits. Always at least two
    /// entries once decoded from a payload that carries the field.
    pub accepted: Vec<i64>,
    pub signal: f64,
    pub noise: f64,
    pub peak_signal: f64,
    pub strong_signals: i64,
}

/// `LocalStats` as it appears on the wire. Older receivers spell the sample
/// counter `sample_processed`; `samples_processed` wins when both are sent.
#[derive(Default, Deserialize)]
#[serde(default)]
struct LocalStatsWire {
    samples_processed: Option<i64>,
    sample_processed: Option<i64>,
    samples_dropped: i64,
    modeac: i64,
    modes: i64,
    bad: i64,
    unknown_icao: i64,
    #[serde(deserialize_with = "accepted_counts")]
    accepted: Vec<i64>,
    signal: f64,
    noise: f64,
    peak_signal: f64,
    strong_signals: i64,
}

impl From<LocalStatsWire> for LocalStats {
    fn from(wire: LocalStatsWire) -> Self {
        LocalStats {
            samples_processed: wire
                .samples_processed
                .or(wire.sample_processed)
                .unwrap_or_default(),
            samples_dropped: wire.samples_dropped,
            modeac: wire.modeac,
            modes: wire.modes,
            bad: wire.bad,
            unknown_icao: wire.unknown_icao,
            accepted: wire.accepted,
            signal: wire.signal,
            noise: wire.noise,
            peak_signal: wire.peak_signal,
            strong_signals: wire.strong_signals,
        }
    }
}

/// Counters for messages relayed from network inputs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteStats {
    pub modeac: i64,
    pub modes: i64,
    pub bad: i64,
    pub unknown_icao: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub accepted: Vec<i64>,
    pub http_requests: i64,
}

/// Compact Position Reporting decode outcomes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CprStats {
    pub surface: i64,
    pub airborne: i64,
    pub global_ok: i64,
    pub global_bad: i64,
    pub global_range: i64,
    pub global_speed: i64,
    pub global_skipped: i64,
    pub local_ok: i64,
    pub local_aircraft_relative: i64,
    pub local_receiver_relative: i64,
    pub local_skipped: i64,
    pub local_range: i64,
    pub local_speed: i64,
    pub filtered: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackStats {
    pub all: i64,
    pub single_message: i64,
}

impl LocalStats {
    /// Messages accepted without error correction.
    pub fn accepted_clean(&self) -> i64 {
        self.accepted.first().copied().unwrap_or_default()
    }

    /// Messages accepted after correcting one bit.
    pub fn accepted_corrected(&self) -> i64 {
        self.accepted.get(1).copied().unwrap_or_default()
    }
}

/// `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn accepted_counts<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(counts) = Option::<Vec<i64>>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    if counts.len() < 2 {
        return Err(de::Error::invalid_length(
            counts.len(),
            &"at least two accepted counters",
        ));
    }
    Ok(counts)
}
