//! Poll dump1090's `stats.json` and publish receiver statistics to InfluxDB.
//!
//! Each poll cycle fetches the statistics endpoint ([`fetch`]), decodes the
//! body into [`stats::StatsRecord`]s, and writes one point per statistics
//! window through a [`influx::PointWriter`] ([`publish`]). [`poller`] drives
//! the cycles on a fixed interval.

pub mod cli;
pub mod config;
pub mod duration;
pub mod fetch;
pub mod influx;
pub mod logging;
pub mod pipeline;
pub mod poller;
pub mod publish;
pub mod stats;

mod test_server;
