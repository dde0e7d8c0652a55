use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not an http(s) URL")]
    UnsupportedScheme(Url),

    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error("HTTP timeout must be greater than zero")]
    ZeroHttpTimeout,
}

/// Where and how points are written.
#[derive(Clone)]
pub struct InfluxConfig {
    pub url: Url,
    pub token: String,
    pub org: String,
    pub bucket: String,
}

// Keeps the token out of logs.
impl std::fmt::Debug for InfluxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfluxConfig")
            .field("url", &self.url)
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .field("org", &self.org)
            .field("bucket", &self.bucket)
            .finish()
    }
}

/// Validated settings, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: Url,
    pub influx: InfluxConfig,
    pub poll_interval: Duration,
    pub http_timeout: Duration,
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let source_url = http_url(&cli.host)?;
        let influx_url = http_url(&cli.influx_url)?;
        if cli.poll_time.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        if cli.http_timeout.is_zero() {
            return Err(ConfigError::ZeroHttpTimeout);
        }

        Ok(Config {
            source_url,
            influx: InfluxConfig {
                url: influx_url,
                token: cli.influx_token.clone(),
                org: cli.influx_org.clone(),
                bucket: cli.influx_db.clone(),
            },
            poll_interval: cli.poll_time,
            http_timeout: cli.http_timeout,
        })
    }
}

fn http_url(url: &Url) -> Result<Url, ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(url.clone()),
        _ => Err(ConfigError::UnsupportedScheme(url.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const HOST: &str = "http://receiver.lan/dump1090/data/stats.json";

    fn cli(host: &str, args: &[&str]) -> Cli {
        let mut argv = vec![
            "dump1090-influx",
            "--host",
            host,
            "--influx-url",
            "http://influx.lan:8086",
        ];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_valid_config() {
        let config = Config::try_from(&cli(HOST, &["--influx-org", "home", "--influx-token", "t0k"])).unwrap();
        assert_eq!(config.source_url.path(), "/dump1090/data/stats.json");
        assert_eq!(config.influx.org, "home");
        assert_eq!(config.influx.token, "t0k");
        assert!(config.poll_interval > Duration::ZERO);
    }

    #[test]
    fn test_token_not_in_debug_output() {
        let config = Config::try_from(&cli(HOST, &["--influx-token", "t0k"])).unwrap();
        assert!(!format!("{:?}", config).contains("t0k"));
    }

    #[test]
    fn test_non_http_scheme() {
        let err = Config::try_from(&cli("ftp://receiver.lan/stats.json", &[])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_zero_poll_interval() {
        let err = Config::try_from(&cli(HOST, &["--poll-time", "0s"])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroPollInterval);
    }
}
