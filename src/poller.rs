//! Fixed-interval driver for poll cycles.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Launch `cycle` immediately and then once per `period`, forever.
///
/// Each cycle runs as its own task so a slow cycle does not shift the timer.
/// At most one cycle is in flight: a tick that finds the previous cycle
/// still running is skipped.
pub async fn run_every<F, Fut>(period: Duration, mut cycle: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight: Option<JoinHandle<()>> = None;

    loop {
        ticker.tick().await;

        if let Some(handle) = in_flight.take() {
            if !handle.is_finished() {
                log::warn!("Previous poll cycle still running, skipping this one");
                in_flight = Some(handle);
                continue;
            }
            if let Err(e) = handle.await {
                log::error!("Poll cycle task failed: {}", e);
            }
        }

        in_flight = Some(tokio::spawn(cycle()));
    }
}
