// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synthetic progress ticker.
//!
//! While a remote transform is outstanding, a background task raises the
//! published progress by a random increment on every tick, never past the
//! ceiling. The ticker is owned by the running transform: [`ProgressTicker::stop`]
//! cancels the task and waits for it, and dropping the ticker cancels it too,
//! so no exit path leaves the task running.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use roomcraft_config::model::ProgressConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Progress published once the remote call has settled.
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Tick interval, increment bound, and ceiling of the ticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSettings {
    pub interval: Duration,
    pub max_increment: f64,
    pub ceiling: f64,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self::from(&ProgressConfig::default())
    }
}

impl From<&ProgressConfig> for ProgressSettings {
    fn from(config: &ProgressConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.tick_interval_ms),
            max_increment: config.max_increment,
            ceiling: config.ceiling,
        }
    }
}

/// Raise `current` by `increment`, clamped to `ceiling`.
///
/// Returns whether the value changed. A value already at or above the
/// ceiling (including [`PROGRESS_COMPLETE`]) is never touched.
pub(crate) fn advance(current: &mut f64, increment: f64, ceiling: f64) -> bool {
    if *current >= ceiling {
        return false;
    }
    let next = (*current + increment.max(0.0)).min(ceiling);
    if next > *current {
        *current = next;
        true
    } else {
        false
    }
}

/// Handle to a running progress task.
pub(crate) struct ProgressTicker {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    /// Spawn the ticker task publishing into `progress`.
    pub(crate) fn start(progress: Arc<watch::Sender<f64>>, settings: ProgressSettings) -> Self {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(settings.interval);
            // Skip the first immediate tick.
            interval.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = task_cancel.cancelled() => break,
                    _ = interval.tick() => {
                        let increment = random_increment(settings.max_increment);
                        progress.send_if_modified(|current| {
                            advance(current, increment, settings.ceiling)
                        });
                        trace!(progress = *progress.borrow(), "progress tick");
                    }
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Cancel the task and wait until it has exited.
    pub(crate) async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            // A cancelled or panicked ticker has nothing left to clean up.
            let _ = handle.await;
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn random_increment(max_increment: f64) -> f64 {
    if max_increment > 0.0 {
        rand::thread_rng().gen_range(0.0..max_increment)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_to_ceiling() {
        let mut value = 85.0;
        assert!(advance(&mut value, 14.0, 90.0));
        assert_eq!(value, 90.0);
        assert!(!advance(&mut value, 5.0, 90.0));
        assert_eq!(value, 90.0);
    }

    #[test]
    fn advance_never_touches_completed_progress() {
        let mut value = PROGRESS_COMPLETE;
        assert!(!advance(&mut value, 10.0, 90.0));
        assert_eq!(value, PROGRESS_COMPLETE);
    }

    #[test]
    fn advance_ignores_negative_increment() {
        let mut value = 10.0;
        assert!(!advance(&mut value, -3.0, 90.0));
        assert_eq!(value, 10.0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_climbs_monotonically_and_stops_below_ceiling() {
        let (tx, mut rx) = watch::channel(0.0);
        let tx = Arc::new(tx);
        let settings = ProgressSettings {
            interval: Duration::from_millis(500),
            max_increment: 15.0,
            ceiling: 90.0,
        };
        let ticker = ProgressTicker::start(tx.clone(), settings);

        let mut last = 0.0;
        for _ in 0..40 {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let now = *rx.borrow_and_update();
            assert!(now >= last, "progress went backwards: {last} -> {now}");
            assert!(now <= 90.0, "progress passed the ceiling: {now}");
            last = now;
        }

        ticker.stop().await;
        tx.send_replace(PROGRESS_COMPLETE);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(*rx.borrow(), PROGRESS_COMPLETE);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_ticker_cancels_it() {
        let (tx, rx) = watch::channel(0.0);
        let tx = Arc::new(tx);
        let ticker = ProgressTicker::start(tx.clone(), ProgressSettings::default());
        let token = ticker.cancel.clone();
        drop(ticker);
        assert!(token.is_cancelled());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(*rx.borrow(), 0.0);
    }
}
