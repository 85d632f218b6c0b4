//! Polling monitor for a single tracked flight.
//!
//! Fetches the snapshot immediately and then on a fixed interval, computes
//! the route progress ONCE per snapshot via `lib-flightpath`, and publishes
//! both through a watch channel. Every consumer receives the same derived
//! value; none recomputes progress on its own.

use chrono::{DateTime, Utc};
use lib_flightpath::progress::FlightProgress;
use lib_flightpath::snapshot::{FlightSnapshot, FlightStatus};
use std::time::Duration;
use tokio::sync::watch;

use crate::client::ClientError;
use crate::notify::{Notifier, Severity};
use crate::service::Client;

/// Time between snapshot refreshes
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// How many times a failed fetch is retried before giving up
pub const MAX_FETCH_RETRIES: u32 = 2;

/// Longest backoff delay between retries
pub const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// One published monitor update. Each update supersedes the previous one in
/// full; nothing is merged or patched.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightUpdate {
    /// The snapshot as served by the tracker service
    pub snapshot: FlightSnapshot,

    /// Progress derived once from this snapshot, shared by all consumers
    pub progress: FlightProgress,

    /// When this snapshot was fetched, for staleness display
    pub updated_at: DateTime<Utc>,
}

/// Monitor publishing (snapshot, progress) updates for one flight
#[derive(Debug)]
pub struct FlightMonitor {
    tx: watch::Sender<Option<FlightUpdate>>,
    notifier: Notifier,
}

impl FlightMonitor {
    /// Create a new monitor with no update yet
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        FlightMonitor {
            tx,
            notifier: Notifier::new(),
        }
    }

    /// Register a consumer of (snapshot, progress) updates
    pub fn subscribe(&self) -> watch::Receiver<Option<FlightUpdate>> {
        self.tx.subscribe()
    }

    /// The notification handle fetch failures are published through
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Poll the given flight until it lands, a fetch fails beyond its
    /// retries, or every subscriber is dropped. Refreshes every
    /// [`REFRESH_INTERVAL`].
    pub async fn run<C: Client>(&self, client: &C, code: &str) {
        self.run_with_interval(client, code, REFRESH_INTERVAL).await
    }

    /// [`run`](FlightMonitor::run) with a caller-specified refresh interval
    pub async fn run_with_interval<C: Client>(
        &self,
        client: &C,
        code: &str,
        interval: Duration,
    ) {
        monitor_info!("(run_with_interval) polling [{}].", code);

        loop {
            let snapshot = match fetch_with_retry(client, code).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    monitor_warn!("(run_with_interval) giving up on [{}]: {}.", code, e);
                    self.notifier.notify(Severity::Error, e.to_string());
                    return;
                }
            };

            // the single shared progress computation for this snapshot
            let progress = FlightProgress::for_snapshot(Some(&snapshot));
            let landed = snapshot.status == Some(FlightStatus::Landed);

            let update = FlightUpdate {
                snapshot,
                progress,
                updated_at: Utc::now(),
            };

            if self.tx.send(Some(update)).is_err() {
                monitor_info!("(run_with_interval) all consumers dropped, stopping.");
                return;
            }

            if landed {
                monitor_info!("(run_with_interval) flight [{}] landed, polling stops.", code);
                return;
            }

            tokio::time::sleep(interval).await;
        }
    }
}

impl Default for FlightMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Backoff delay before retry `attempt + 1`, doubling from 1s up to
/// [`MAX_BACKOFF`]
pub fn retry_backoff(attempt: u32) -> Duration {
    MAX_BACKOFF.min(Duration::from_secs(1) * 2u32.pow(attempt))
}

async fn fetch_with_retry<C: Client>(
    client: &C,
    code: &str,
) -> Result<FlightSnapshot, ClientError> {
    let mut attempt = 0;
    loop {
        match client.get_flight(code).await {
            Ok(snapshot) => return Ok(snapshot),
            Err(e) if attempt < MAX_FETCH_RETRIES => {
                let delay = retry_backoff(attempt);
                monitor_warn!(
                    "(fetch_with_retry) attempt {} for [{}] failed: {}; retrying in {:?}.",
                    attempt,
                    code,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Format a staleness label from elapsed seconds: "just now" under 5
/// seconds, seconds under a minute, whole minutes beyond that
pub fn format_time_ago(elapsed_seconds: i64) -> String {
    if elapsed_seconds < 5 {
        String::from("just now")
    } else if elapsed_seconds < 60 {
        format!("{}s ago", elapsed_seconds)
    } else {
        format!("{}m ago", elapsed_seconds / 60)
    }
}

/// Staleness label for a fetch timestamp relative to now
pub fn time_ago(updated_at: DateTime<Utc>) -> String {
    format_time_ago((Utc::now() - updated_at).num_seconds())
}
