use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dump1090_influx::cli::Cli;
use dump1090_influx::config::Config;
use dump1090_influx::fetch::Fetcher;
use dump1090_influx::influx::InfluxClient;
use dump1090_influx::logging::app_config;
use dump1090_influx::pipeline::Pipeline;
use dump1090_influx::poller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // initialize the logger
    log4rs::init_config(app_config(cli.log_file.as_deref(), cli.loglevel)?)?;
    log::info!("Starting the application!");

    let config = Config::try_from(&cli).context("invalid configuration")?;
    log::info!("Reading statistics from: {}", config.source_url);
    log::info!("Writing to InfluxDB at {} bucket {}", config.influx.url, config.influx.bucket);
    log::info!("Poll interval is: {:?}", config.poll_interval);

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("cannot build HTTP client")?;
    let fetcher = Fetcher::new(http.clone(), config.source_url.clone());
    let writer = Arc::new(InfluxClient::new(http, &config.influx));
    let pipeline = Arc::new(Pipeline::new(fetcher, writer));

    if cli.once {
        let written = pipeline.run_cycle().await?;
        log::info!("Published {} point(s)", written);
        return Ok(());
    }

    tokio::select! {
        _ = poller::run_every(config.poll_interval, move || pipeline.clone().run_logged()) => {}
        res = tokio::signal::ctrl_c() => {
            res.context("cannot listen for shutdown signal")?;
            log::info!("Shutdown signal received, stopping");
        }
    }
    Ok(())
}
