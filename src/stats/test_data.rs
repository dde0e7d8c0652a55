#![cfg(test)]

/// A trimmed `stats.json` as served by dump1090-fa, with two windows.
pub const STATS_JSON: &str = r#"{
  "latest": {
    "start": 1700000000.125,
    "end": 1700000005.5,
    "local": {
      "samples_processed": 12000000,
      "samples_dropped": 3,
      "modeac": 11,
      "modes": 4512,
      "bad": 2901,
      "unknown_icao": 77,
      "accepted": [1402, 33],
      "signal": -18.4,
      "noise": -31.2,
      "peak_signal": -2.5,
      "strong_signals": 9
    },
    "remote": {
      "modeac": 0,
      "modes": 0,
      "bad": 0,
      "unknown_icao": 0,
      "accepted": [0, 0],
      "http_requests": 12
    },
    "cpr": {
      "surface": 4,
      "airborne": 210,
      "global_ok": 180,
      "global_bad": 1,
      "global_range": 2,
      "global_speed": 3,
      "global_skipped": 5,
      "local_ok": 28,
      "local_aircraft_relative": 20,
      "local_receiver_relative": 8,
      "local_skipped": 6,
      "local_range": 7,
      "local_speed": 8,
      "filtered": 10
    },
    "altitude_suppressed": 13,
    "tracks": {
      "all": 42,
      "single_message": 17
    },
    "messages": 1435
  },
  "total": {
    "start": 1699990000.0,
    "end": 1700000005.5,
    "local": {
      "samples_processed": 9600000000,
      "accepted": [912345, 20456, 12]
    },
    "messages": 932813
  }
}"#;

/// A window where every counter carries a distinct, known value.
pub const DISTINCT_COUNTERS_JSON: &str = r#"{
  "receiver": {
    "start": 946684800.5,
    "end": 946684860.5,
    "local": {
      "samples_processed": 101,
      "samples_dropped": 102,
      "modeac": 103,
      "modes": 104,
      "bad": 105,
      "unknown_icao": 106,
      "accepted": [107, 108],
      "signal": -10.5,
      "noise": -30.25,
      "peak_signal": -1.75,
      "strong_signals": 109
    },
    "remote": {
      "modeac": 1,
      "modes": 2,
      "bad": 3,
      "unknown_icao": 4,
      "accepted": [5, 6],
      "http_requests": 7
    },
    "cpr": {
      "surface": 201,
      "airborne": 202,
      "global_ok": 203,
      "global_bad": 204,
      "global_range": 205,
      "global_speed": 206,
      "global_skipped": 207,
      "local_ok": 208,
      "local_aircraft_relative": 209,
      "local_receiver_relative": 210,
      "local_skipped": 211,
      "local_range": 212,
      "local_speed": 213,
      "filtered": 214
    },
    "altitude_suppressed": 301,
    "tracks": {
      "all": 302,
      "single_message": 303
    },
    "messages": 304
  }
}"#;
