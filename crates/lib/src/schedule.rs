//! # Scheduling Policy
//!
//! The timing knobs the orchestration layer applies around a run: how often to run,
//! and how many times (and how far apart) to retry a failed run.

use crate::constants::{
    DEFAULT_RETRIES, DEFAULT_RETRY_BACKOFF_SECS, DEFAULT_SCHEDULE_INTERVAL_SECS,
};
use crate::pipeline::Pipeline;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

/// How a failed run is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one fails.
    pub retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            backoff: Duration::from_secs(DEFAULT_RETRY_BACKOFF_SECS),
        }
    }
}

/// How often a run is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub interval: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_SCHEDULE_INTERVAL_SECS),
        }
    }
}

/// Runs the pipeline once per interval, starting immediately.
///
/// Missed intervals are skipped rather than caught up. A run that still fails after
/// its retries is logged and the loop moves on to the next interval. With
/// `max_runs` set, the loop returns after that many intervals and reports how many
/// of them succeeded.
pub async fn run_scheduled(
    pipeline: &Pipeline,
    schedule: Schedule,
    policy: RetryPolicy,
    max_runs: Option<usize>,
) -> usize {
    // `interval` panics on a zero period.
    let mut ticker = interval(schedule.interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut runs = 0;
    let mut succeeded = 0;
    loop {
        if max_runs.is_some_and(|max| runs >= max) {
            return succeeded;
        }
        ticker.tick().await;
        runs += 1;

        match pipeline.run_with_retry(&policy).await {
            Ok(summary) => {
                succeeded += 1;
                info!(
                    run = runs,
                    "Scheduled run finished: {} extracted, {} inserted.",
                    summary.extracted, summary.rows_inserted
                );
            }
            Err(e) => error!(run = runs, "Scheduled run failed for this interval: {e}"),
        }
    }
}
