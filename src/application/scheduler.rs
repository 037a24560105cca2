//! Fixed-interval poll scheduler.
//!
//! Runs a cycle at startup and then once per interval. Cycles are awaited
//! inline, so they never overlap; ticks missed while a slow cycle runs are
//! skipped rather than queued. Every cycle error is logged, recorded, and
//! published, and the loop keeps going.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use super::cycle::{CycleReport, PollCycle};
use super::status::PollStatus;
use crate::error::Result;

/// Drives [`PollCycle`] on a timer until shutdown.
pub struct Poller {
    cycle: PollCycle,
    interval: Duration,
    status: Arc<PollStatus>,
}

impl Poller {
    #[must_use]
    pub fn new(cycle: PollCycle, interval: Duration, status: Arc<PollStatus>) -> Self {
        Self {
            cycle,
            interval,
            status,
        }
    }

    #[must_use]
    pub fn status(&self) -> Arc<PollStatus> {
        Arc::clone(&self.status)
    }

    /// Run a single guarded cycle.
    ///
    /// Returns `None` when another cycle is already running. Failures are
    /// recorded in the status and published as `CycleFailed` events before
    /// being handed back.
    pub async fn run_once(&self) -> Option<Result<CycleReport>> {
        let Some(guard) = self.status.try_begin() else {
            warn!("Previous cycle still running, skipping tick");
            return None;
        };

        let result = self.cycle.run().await;
        match &result {
            Ok(report) => {
                info!(
                    fetched = report.fetched,
                    transitions = report.transitions.len(),
                    "Availability check complete"
                );
                guard.succeeded(report.transitions.len());
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Availability check failed, cycle skipped");
                self.cycle.report_failure(e.kind(), e.to_string());
                guard.failed(e.to_string());
            }
        }
        Some(result)
    }

    /// Run until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// An in-flight cycle is abandoned on shutdown; the snapshot store's
    /// atomic save keeps the file consistent.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            interval_secs = self.interval.as_secs(),
            "Availability monitoring started"
        );

        loop {
            tokio::select! {
                _ = shutdown_requested(&mut shutdown) => {
                    info!("Shutdown signal received");
                    break;
                }
                _ = ticker.tick() => {
                    tokio::select! {
                        _ = self.run_once() => {}
                        _ = shutdown_requested(&mut shutdown) => {
                            warn!("Shutdown during cycle, abandoning it");
                            break;
                        }
                    }
                }
            }
        }

        info!("Availability monitoring stopped");
    }
}

/// Resolves once shutdown is signalled or the sender goes away.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
