//! Fractional Unix epoch timestamps.
//!
//! dump1090 reports the bounds of each statistics window as seconds since
//! the epoch with a fractional part, e.g. `1700000000.125`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

const NANOS_PER_SEC: f64 = 1e9;
const MAX_NANOS: u32 = 999_999_999;

/// Convert fractional epoch seconds into a UTC timestamp.
///
/// The whole seconds are floored toward negative infinity, so `-1.25`
/// becomes second `-2` plus `750_000_000` nanoseconds.
///
/// Returns `None` when the value is not finite or out of chrono's range.
pub fn decode_epoch(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let secs = value.floor();
    let nanos = ((value - secs) * NANOS_PER_SEC).floor() as u32;
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_opt(secs as i64, nanos.min(MAX_NANOS)).single()
}

/// Serde adapter for `#[serde(deserialize_with = "epoch::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    decode_epoch(value).ok_or_else(|| {
        de::Error::invalid_value(de::Unexpected::Float(value), &"an epoch timestamp in range")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::deserialize")]
        at: DateTime<Utc>,
    }

    fn parse(literal: &str) -> Result<DateTime<Utc>, serde_json::Error> {
        serde_json::from_str::<Wrapper>(&format!(r#"{{"at": {literal}}}"#)).map(|w| w.at)
    }

    #[test]
    fn test_millennium_half_second() {
        let at = parse("946684800.5").unwrap();
        assert_eq!(at.year(), 2000);
        assert_eq!(at.day(), 1);
        assert_eq!(at.hour(), 0);
        assert_eq!(at.minute(), 0);
        assert_eq!(at.second(), 0);
        assert_eq!(at.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_integer_literal() {
        let at = parse("1700000000").unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
        assert_eq!(at.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_negative_floors_toward_negative_infinity() {
        let at = decode_epoch(-1.25).unwrap();
        assert_eq!(at.timestamp(), -2);
        assert_eq!(at.timestamp_subsec_nanos(), 750_000_000);
    }

    #[test]
    fn test_floor_properties() {
        for n in [0.0, 0.001, 12.75, 946684800.5, 1700000000.125, -0.5, -3.0, -1234.0625] {
            let at = decode_epoch(n).unwrap();
            let floor = f64::floor(n);
            assert_eq!(at.timestamp(), floor as i64, "seconds for {n}");
            assert_eq!(
                at.timestamp_subsec_nanos(),
                ((n - floor) * 1e9).floor() as u32,
                "nanoseconds for {n}"
            );
        }
    }

    #[test]
    fn test_quoted_string_fails() {
        assert!(parse(r#""notanumb3r""#).is_err());
    }

    #[test]
    fn test_other_literals_fail() {
        assert!(parse("true").is_err());
        assert!(parse("null").is_err());
        assert!(parse("{}").is_err());
    }

    #[test]
    fn test_out_of_range_fails() {
        assert!(parse("1e300").is_err());
        assert!(decode_epoch(f64::NAN).is_none());
    }
}
