// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One wizard run, from the store to the remote service and back.
//!
//! [`run_flow`] snapshots the target flow under the store lock, debits the
//! action's credit cost, releases the lock for the remote call, and writes
//! the produced image back into the flow it captured at start. Changing the
//! active flow while the call is outstanding does not redirect the result.

use roomcraft_core::{Action, FlowKind, MaskStroke, TransformRequest, TransformResult};
use roomcraft_state::SharedRoomStore;
use tracing::{debug, info, warn};

use crate::orchestrator::TransformOrchestrator;

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The remote call produced an image, now stored in the flow.
    Succeeded(TransformResult),
    /// The remote call failed. Credits stay debited.
    Failed(TransformResult),
    /// Not enough credits; nothing was sent.
    InsufficientCredits { required: u32, available: u32 },
    /// The flow has no source image; nothing was debited or sent.
    MissingSourceImage,
}

impl RunOutcome {
    /// The transform result, for outcomes that reached the remote service.
    pub fn result(&self) -> Option<&TransformResult> {
        match self {
            RunOutcome::Succeeded(result) | RunOutcome::Failed(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Succeeded(_))
    }
}

/// Serialize mask strokes into the `maskData` wire field.
///
/// Returns `None` for an empty mask so the field is omitted.
pub fn encode_mask(strokes: &[MaskStroke]) -> Option<String> {
    if strokes.is_empty() {
        return None;
    }
    match serde_json::to_string(strokes) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!(error = %e, "failed to encode mask, sending without it");
            None
        }
    }
}

/// Run `action` against the source image of `flow`.
pub async fn run_flow(
    store: &SharedRoomStore,
    orchestrator: &TransformOrchestrator,
    flow: FlowKind,
    action: Action,
) -> RunOutcome {
    let request = {
        let mut guard = store.lock().await;
        let state = guard.flow_state(flow);
        let Some(source) = state.source_image.clone() else {
            debug!(flow = %flow, "run refused, no source image");
            return RunOutcome::MissingSourceImage;
        };
        let mask_data = encode_mask(&state.mask_strokes);

        let cost = action.credit_cost();
        let available = guard.credits();
        if !guard.deduct_credits(cost) {
            return RunOutcome::InsufficientCredits {
                required: cost,
                available,
            };
        }

        let selections = guard.selections();
        TransformRequest {
            image_base64: source,
            room_type: selections.room_type.clone(),
            design_style: selections.design_style.clone(),
            action,
            color: Some(selections.selected_color.clone()),
            mask_data,
        }
    };

    info!(flow = %flow, action = %action, "wizard run started");
    let result = orchestrator.transform_room(request).await;

    match &result.image_url {
        Some(image) if result.success => {
            store
                .lock()
                .await
                .set_flow_transformed_image(flow, Some(image.clone()));
            RunOutcome::Succeeded(result)
        }
        _ => RunOutcome::Failed(result),
    }
}

/// Run the active flow's default action.
pub async fn run_active_flow(
    store: &SharedRoomStore,
    orchestrator: &TransformOrchestrator,
) -> RunOutcome {
    let flow = store.lock().await.active_flow();
    run_flow(store, orchestrator, flow, flow.default_action()).await
}
