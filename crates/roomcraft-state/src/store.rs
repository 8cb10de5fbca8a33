// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flow state store.
//!
//! [`RoomStore`] keeps one [`FlowState`] per [`FlowKind`], the shared session
//! selections, and the credit ledger. Scoped setters address a flow
//! explicitly; the unscoped accessors are thin wrappers that pass the
//! current active flow as that argument. Every setter touches exactly one
//! field of exactly one flow.

use std::sync::Arc;

use roomcraft_config::model::SessionConfig;
use roomcraft_core::{FlowKind, FlowState, ImageRef, MaskStroke};
use tracing::debug;

use crate::credits::CreditLedger;

/// A store shared between the UI layer and running transforms.
pub type SharedRoomStore = Arc<tokio::sync::Mutex<RoomStore>>;

/// Free-form selections shared by all flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub room_type: String,
    pub design_style: String,
    pub selected_color: String,
}

/// Application state: nine flow states, the active-flow pointer, selections, and credits.
#[derive(Debug, Clone)]
pub struct RoomStore {
    flows: [FlowState; 9],
    active_flow: FlowKind,
    selections: Selections,
    credits: CreditLedger,
}

impl RoomStore {
    /// Create a store seeded from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            flows: Default::default(),
            active_flow: FlowKind::StyleChange,
            selections: Selections {
                room_type: config.room_type.clone(),
                design_style: config.design_style.clone(),
                selected_color: config.selected_color.clone(),
            },
            credits: CreditLedger::new(config.initial_credits),
        }
    }

    /// Wrap the store for sharing across tasks.
    pub fn into_shared(self) -> SharedRoomStore {
        Arc::new(tokio::sync::Mutex::new(self))
    }

    fn flow_mut(&mut self, kind: FlowKind) -> &mut FlowState {
        &mut self.flows[kind.index()]
    }

    // --- Active flow ---

    /// Point the unscoped accessors at `kind`.
    pub fn set_active_flow(&mut self, kind: FlowKind) {
        debug!(flow = %kind, "active flow changed");
        self.active_flow = kind;
    }

    pub fn active_flow(&self) -> FlowKind {
        self.active_flow
    }

    // --- Scoped operations ---

    /// State of the addressed flow. Never absent: untouched flows are empty.
    pub fn flow_state(&self, kind: FlowKind) -> &FlowState {
        &self.flows[kind.index()]
    }

    pub fn set_flow_image(&mut self, kind: FlowKind, image: Option<ImageRef>) {
        self.flow_mut(kind).source_image = image;
    }

    pub fn set_flow_transformed_image(&mut self, kind: FlowKind, image: Option<ImageRef>) {
        self.flow_mut(kind).result_image = image;
    }

    pub fn set_flow_mask(&mut self, kind: FlowKind, strokes: Vec<MaskStroke>) {
        self.flow_mut(kind).mask_strokes = strokes;
    }

    /// Reset the addressed flow to its empty default.
    pub fn clear_flow(&mut self, kind: FlowKind) {
        debug!(flow = %kind, "flow cleared");
        *self.flow_mut(kind) = FlowState::default();
    }

    // --- Unscoped convenience accessors (active flow) ---

    pub fn original_image(&self) -> Option<&ImageRef> {
        self.flow_state(self.active_flow).source_image.as_ref()
    }

    pub fn transformed_image(&self) -> Option<&ImageRef> {
        self.flow_state(self.active_flow).result_image.as_ref()
    }

    pub fn mask_strokes(&self) -> &[MaskStroke] {
        &self.flow_state(self.active_flow).mask_strokes
    }

    pub fn set_original_image(&mut self, image: Option<ImageRef>) {
        self.set_flow_image(self.active_flow, image);
    }

    pub fn set_transformed_image(&mut self, image: Option<ImageRef>) {
        self.set_flow_transformed_image(self.active_flow, image);
    }

    pub fn set_mask_strokes(&mut self, strokes: Vec<MaskStroke>) {
        self.set_flow_mask(self.active_flow, strokes);
    }

    /// Append one stroke to the active flow's mask, keeping earlier strokes.
    pub fn add_mask_stroke(&mut self, stroke: MaskStroke) {
        let kind = self.active_flow;
        self.flow_mut(kind).mask_strokes.push(stroke);
    }

    pub fn clear_mask(&mut self) {
        self.set_flow_mask(self.active_flow, Vec::new());
    }

    /// Drop the active flow's result image, keeping its source and mask.
    pub fn reset_transform(&mut self) {
        self.set_flow_transformed_image(self.active_flow, None);
    }

    // --- Shared selections ---

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn set_room_type(&mut self, room_type: impl Into<String>) {
        self.selections.room_type = room_type.into();
    }

    pub fn set_design_style(&mut self, design_style: impl Into<String>) {
        self.selections.design_style = design_style.into();
    }

    pub fn set_selected_color(&mut self, color: impl Into<String>) {
        self.selections.selected_color = color.into();
    }

    // --- Credits ---

    pub fn credits(&self) -> u32 {
        self.credits.balance()
    }

    /// Debit `amount` if affordable. See [`CreditLedger::deduct_credits`].
    pub fn deduct_credits(&mut self, amount: u32) -> bool {
        self.credits.deduct_credits(amount)
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
