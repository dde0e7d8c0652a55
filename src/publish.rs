//! Projection of statistics records into time-series points.

use chrono::{DateTime, Utc};

use crate::influx::{FieldValue, Point, PointWriter, WriteError};
use crate::stats::{StatsPayload, StatsRecord};

/// Tag attached to every point.
pub const UNIT_TAG: (&str, &str) = ("unit", "random");

/// The fixed set of published fields, in write order.
pub fn project(record: &StatsRecord) -> Vec<(&'static str, FieldValue)> {
    let local = &record.local;
    let cpr = &record.cpr;
    vec![
        ("alt_suppressed", record.altitude_suppressed.into()),
        ("messages", record.messages.into()),
        ("local_samples_processed", local.samples_processed.into()),
        ("local_samples_dropped", local.samples_dropped.into()),
        ("local_modeac", local.modeac.into()),
        ("local_modes", local.modes.into()),
        ("local_bad", local.bad.into()),
        ("local_unknown_icao", local.unknown_icao.into()),
        ("local_accepted_n", local.accepted_clean().into()),
        ("local_accepted_bits", local.accepted_corrected().into()),
        ("local_signal", local.signal.into()),
        // Published from the peak signal, not the noise floor.
        ("local_noise", local.peak_signal.into()),
        ("local_strong_signals", local.strong_signals.into()),
        ("cpr_surface", cpr.surface.into()),
        ("cpr_airborne", cpr.airborne.into()),
        ("cpr_global_ok", cpr.global_ok.into()),
        ("cpr_global_bad", cpr.global_bad.into()),
        ("cpr_global_badrange", cpr.global_range.into()),
        ("cpr_global_badspeed", cpr.global_speed.into()),
        ("cpr_global_skipped", cpr.global_skipped.into()),
        ("cpr_local_ok", cpr.local_ok.into()),
        ("cpr_local_acft_rel", cpr.local_aircraft_relative.into()),
        ("cpr_local_recv_rel", cpr.local_receiver_relative.into()),
        ("cpr_local_skip", cpr.local_skipped.into()),
        ("cpr_local_skip_range", cpr.local_range.into()),
        ("cpr_local_skip_speed", cpr.local_speed.into()),
        ("cpr_filtered", cpr.filtered.into()),
        ("tracks_all", record.tracks.all.into()),
        ("tracks_single_msg", record.tracks.single_message.into()),
    ]
}

pub fn build_point(key: &str, record: &StatsRecord, now: DateTime<Utc>) -> Point {
    let mut point = Point::new(key, now).tag(UNIT_TAG.0, UNIT_TAG.1);
    point.fields = project(record);
    point
}

/// Write one point per statistics window, stamped with the current time.
///
/// Stops at the first failed write; points written before it stay written.
/// Returns the number of points written.
pub async fn publish(payload: &StatsPayload, writer: &dyn PointWriter) -> Result<usize, WriteError> {
    let mut written = 0;
    for (key, record) in payload {
        let point = build_point(key, record, Utc::now());
        writer.write(&point).await?;
        log::debug!("Wrote point for {}", key);
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::TimeZone;

    use super::*;
    use crate::stats::parse_stats;
    use crate::stats::test_data::{DISTINCT_COUNTERS_JSON, STATS_JSON};

    /// Keeps written points in memory, optionally failing after `fail_after`
    /// successful writes.
    #[derive(Default)]
    pub(crate) struct RecordingWriter {
        pub points: Mutex<Vec<Point>>,
        pub fail_after: Option<usize>,
    }

    impl RecordingWriter {
        pub fn failing_after(n: usize) -> Self {
            Self {
                points: Mutex::new(Vec::new()),
                fail_after: Some(n),
            }
        }

        pub fn points(&self) -> Vec<Point> {
            self.points.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PointWriter for RecordingWriter {
        async fn write(&self, point: &Point) -> Result<(), WriteError> {
            let mut points = self.points.lock().unwrap();
            if self.fail_after.is_some_and(|n| points.len() >= n) {
                return Err(WriteError::Rejected {
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                    body: "store unavailable".to_string(),
                });
            }
            points.push(point.clone());
            Ok(())
        }
    }

    #[test]
    fn test_projection_of_known_record() {
        let payload = parse_stats(DISTINCT_COUNTERS_JSON.as_bytes()).unwrap();
        let fields = project(&payload["receiver"]);

        use FieldValue::{Float, Integer};
        let expected: Vec<(&str, FieldValue)> = vec![
            ("alt_suppressed", Integer(301)),
            ("messages", Integer(304)),
            ("local_samples_processed", Integer(101)),
            ("local_samples_dropped", Integer(102)),
            ("local_modeac", Integer(103)),
            ("local_modes", Integer(104)),
            ("local_bad", Integer(105)),
            ("local_unknown_icao", Integer(106)),
            ("local_accepted_n", Integer(107)),
            ("local_accepted_bits", Integer(108)),
            ("local_signal", Float(-10.5)),
            ("local_noise", Float(-1.75)),
            ("local_strong_signals", Integer(109)),
            ("cpr_surface", Integer(201)),
            ("cpr_airborne", Integer(202)),
            ("cpr_global_ok", Integer(203)),
            ("cpr_global_bad", Integer(204)),
            ("cpr_global_badrange", Integer(205)),
            ("cpr_global_badspeed", Integer(206)),
            ("cpr_global_skipped", Integer(207)),
            ("cpr_local_ok", Integer(208)),
            ("cpr_local_acft_rel", Integer(209)),
            ("cpr_local_recv_rel", Integer(210)),
            ("cpr_local_skip", Integer(211)),
            ("cpr_local_skip_range", Integer(212)),
            ("cpr_local_skip_speed", Integer(213)),
            ("cpr_filtered", Integer(214)),
            ("tracks_all", Integer(302)),
            ("tracks_single_msg", Integer(303)),
        ];
        assert_eq!(fields.len(), 29);
        assert_eq!(fields, expected);
    }

    #[test]
    fn test_point_line() {
        let payload = parse_stats(DISTINCT_COUNTERS_JSON.as_bytes()).unwrap();
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let line = build_point("receiver", &payload["receiver"], now)
            .to_line_protocol()
            .unwrap();

        assert!(line.starts_with("receiver,unit=random alt_suppressed=301i,messages=304i,"));
        assert!(line.contains(",local_accepted_n=107i,local_accepted_bits=108i,"));
        assert!(line.contains(",local_signal=-10.5,local_noise=-1.75,"));
        assert!(line.ends_with(",tracks_single_msg=303i 1700000000000000000"));
    }

    #[test]
    fn test_point_uses_construction_time() {
        let payload = parse_stats(DISTINCT_COUNTERS_JSON.as_bytes()).unwrap();
        let now = Utc.timestamp_opt(1_800_000_000, 0).unwrap();
        let point = build_point("receiver", &payload["receiver"], now);
        assert_eq!(point.timestamp, now);
        assert_ne!(point.timestamp, payload["receiver"].start);
        assert_eq!(point.tags, vec![("unit".to_string(), "random".to_string())]);
    }

    #[tokio::test]
    async fn test_publish_one_point_per_key() {
        let payload = parse_stats(STATS_JSON.as_bytes()).unwrap();
        let writer = RecordingWriter::default();

        let written = publish(&payload, &writer).await.unwrap();

        assert_eq!(written, 2);
        let mut names: Vec<String> = writer.points().into_iter().map(|p| p.measurement).collect();
        names.sort();
        assert_eq!(names, vec!["latest", "total"]);
    }

    #[tokio::test]
    async fn test_publish_stops_at_first_failure() {
        let payload = parse_stats(STATS_JSON.as_bytes()).unwrap();
        let writer = RecordingWriter::failing_after(1);

        let err = publish(&payload, &writer).await.unwrap_err();

        assert!(matches!(err, WriteError::Rejected { .. }));
        assert_eq!(writer.points().len(), 1);
    }

    #[tokio::test]
    async fn test_publish_is_idempotent() {
        let payload = parse_stats(DISTINCT_COUNTERS_JSON.as_bytes()).unwrap();
        let writer = RecordingWriter::default();

        publish(&payload, &writer).await.unwrap();
        publish(&payload, &writer).await.unwrap();

        let points = writer.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].measurement, points[1].measurement);
        assert_eq!(points[0].tags, points[1].tags);
        assert_eq!(points[0].fields, points[1].fields);
    }
}
