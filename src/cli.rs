use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::ValueHint;
use reqwest::Url;

use crate::duration::parse_duration;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// dump1090 statistics endpoint
    ///
    /// The URL of the receiver's stats.json, polled once per interval.
    #[arg(long, env="HOST", value_hint=ValueHint::Url, value_parser=Url::parse, default_value="http://localhost/dump1090/data/stats.json")]
    pub host: Url,

    /// InfluxDB base URL
    #[arg(long, env="INFLUX_URL", value_hint=ValueHint::Url, value_parser=Url::parse, default_value="http://localhost:8086")]
    pub influx_url: Url,

    /// InfluxDB API token
    ///
    /// Sent as `Authorization: Token <token>`. Left out when empty.
    #[arg(long, env="INFLUX_TOKEN", hide_env_values=true, default_value="")]
    pub influx_token: String,

    /// InfluxDB organization
    #[arg(long, env="INFLUX_ORG", value_hint=ValueHint::Other, default_value="")]
    pub influx_org: String,

    /// InfluxDB bucket to write to
    #[arg(long, env="INFLUX_DB", value_hint=ValueHint::Other, default_value="dump1090")]
    pub influx_db: String,

    /// Poll interval
    ///
    /// The time between two consecutive polls, e.g. 10s, 500ms or 1m.
    #[arg(short='i', long, env="POLL_TIME", value_parser=parse_duration, default_value="10s")]
    pub poll_time: Duration,

    /// HTTP request timeout
    ///
    /// Applies to both the statistics endpoint and InfluxDB.
    #[arg(long, env="HTTP_TIMEOUT", value_parser=parse_duration, default_value="10s")]
    pub http_timeout: Duration,

    /// Set the logging level
    #[arg(short, long, env="LOG_LEVEL", value_hint=ValueHint::Other, default_value="INFO")]
    pub loglevel: log::LevelFilter,

    /// Also write the log to this file
    #[arg(long, env="LOG_FILE", value_hint=ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Poll once, publish, and exit
    #[arg(long)]
    pub once: bool,
}
