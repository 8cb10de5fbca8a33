// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transform orchestration for Roomcraft.
//!
//! This crate provides:
//! - **Orchestrator**: one remote transform call per run with phase, progress,
//!   and last-result tracking
//! - **Progress ticker**: synthetic progress while the remote call is outstanding
//! - **History**: best-effort writes after success and the newest-first reader
//! - **Wizard runs**: credit debit, request assembly, and result write-back

pub mod history;
pub mod labels;
pub mod orchestrator;
pub mod progress;
pub mod run;

pub use history::{DEFAULT_HISTORY_LIMIT, HistoryReader, history_record_for, record_transformation};
pub use labels::{style_name, transformation_label};
pub use orchestrator::{TransformOrchestrator, TransformPhase};
pub use progress::{PROGRESS_COMPLETE, ProgressSettings};
pub use run::{RunOutcome, encode_mask, run_active_flow, run_flow};
