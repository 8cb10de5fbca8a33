// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transform orchestrator.
//!
//! Drives one remote transform call per [`TransformOrchestrator::transform_room`]
//! invocation through `Idle -> Running -> {Succeeded, Failed}`:
//!
//! 1. Reset progress to 0 and clear the previous result.
//! 2. Start the synthetic [`ProgressTicker`].
//! 3. Await the remote transform operation.
//! 4. Stop the ticker and publish 100, whatever the outcome.
//! 5. On success, record history (best effort) and notify; on failure, notify.
//!
//! Runs are neither queued nor deduplicated. Callers must not start a second
//! run while one is outstanding.

use std::sync::Arc;

use roomcraft_core::{
    HistoryStore, ImageRef, Notification, Notifier, RoomcraftError, TransformReply,
    TransformRequest, TransformResult, TransformService,
};
use tokio::sync::watch;
use tracing::{error, info};

use crate::history::record_transformation;
use crate::progress::{PROGRESS_COMPLETE, ProgressSettings, ProgressTicker};

/// Message used when a failure carries no text of its own.
const FALLBACK_ERROR: &str = "Failed to transform room";

/// Lifecycle of the most recent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformPhase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl std::fmt::Display for TransformPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformPhase::Idle => write!(f, "idle"),
            TransformPhase::Running => write!(f, "running"),
            TransformPhase::Succeeded => write!(f, "succeeded"),
            TransformPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Calls the remote transform service and persists successful outcomes.
pub struct TransformOrchestrator {
    service: Arc<dyn TransformService>,
    history: Arc<dyn HistoryStore>,
    notifier: Arc<dyn Notifier>,
    settings: ProgressSettings,
    progress: Arc<watch::Sender<f64>>,
    phase: watch::Sender<TransformPhase>,
    result: watch::Sender<Option<TransformResult>>,
}

impl TransformOrchestrator {
    pub fn new(
        service: Arc<dyn TransformService>,
        history: Arc<dyn HistoryStore>,
        notifier: Arc<dyn Notifier>,
        settings: ProgressSettings,
    ) -> Self {
        Self {
            service,
            history,
            notifier,
            settings,
            progress: Arc::new(watch::channel(0.0).0),
            phase: watch::channel(TransformPhase::Idle).0,
            result: watch::channel(None).0,
        }
    }

    /// Current progress percentage (0 to 100).
    pub fn progress(&self) -> f64 {
        *self.progress.borrow()
    }

    /// Receiver that observes every progress update.
    pub fn subscribe_progress(&self) -> watch::Receiver<f64> {
        self.progress.subscribe()
    }

    pub fn phase(&self) -> TransformPhase {
        *self.phase.borrow()
    }

    /// Receiver that observes phase transitions.
    pub fn subscribe_phase(&self) -> watch::Receiver<TransformPhase> {
        self.phase.subscribe()
    }

    /// Outcome of the most recent completed run, if any.
    pub fn last_result(&self) -> Option<TransformResult> {
        self.result.borrow().clone()
    }

    /// Forget the last result and return to `Idle` with progress 0.
    pub fn reset(&self) {
        self.result.send_replace(None);
        self.progress.send_replace(0.0);
        self.phase.send_replace(TransformPhase::Idle);
    }

    /// Run one remote transform to completion.
    ///
    /// Never returns an error: failures are reported through the returned
    /// [`TransformResult`] and an error notification. If this future is
    /// dropped mid-flight, the progress ticker is cancelled with it.
    pub async fn transform_room(&self, request: TransformRequest) -> TransformResult {
        self.result.send_replace(None);
        self.progress.send_replace(0.0);
        self.phase.send_replace(TransformPhase::Running);

        info!(
            action = %request.action,
            service = self.service.name(),
            "transform started"
        );

        let ticker = ProgressTicker::start(Arc::clone(&self.progress), self.settings);
        let outcome = self.service.transform(&request).await;
        ticker.stop().await;
        self.progress.send_replace(PROGRESS_COMPLETE);

        let result = match outcome.and_then(into_image) {
            Ok((image_url, description)) => {
                record_transformation(self.history.as_ref(), &request, &image_url).await;
                self.notifier
                    .notify(Notification::success("Başarılı", "Dönüşüm tamamlandı!"));
                info!(action = %request.action, image_url = %image_url, "transform succeeded");
                TransformResult::succeeded(image_url, description)
            }
            Err(e) => {
                let message = error_message(&e);
                error!(action = %request.action, error = %message, "transform failed");
                self.notifier.notify(Notification::error("Hata", message.clone()));
                TransformResult::failed(message)
            }
        };

        self.phase.send_replace(if result.success {
            TransformPhase::Succeeded
        } else {
            TransformPhase::Failed
        });
        self.result.send_replace(Some(result.clone()));
        result
    }
}

/// Split a reply into the produced image, or the error it reports.
///
/// A blank `error` field does not count as an error.
fn into_image(reply: TransformReply) -> Result<(ImageRef, Option<String>), RoomcraftError> {
    if let Some(message) = reply.error.filter(|m| !m.trim().is_empty()) {
        return Err(RoomcraftError::Remote { message });
    }
    match reply.image_url {
        Some(url) if !url.trim().is_empty() => Ok((ImageRef(url), reply.description)),
        _ => Err(RoomcraftError::Remote {
            message: "transform service returned no image".to_string(),
        }),
    }
}

fn error_message(error: &RoomcraftError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}
