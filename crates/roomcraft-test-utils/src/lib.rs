// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Roomcraft integration tests.
//!
//! Provides in-memory stand-ins for the remote collaborators so tests run
//! deterministically without a backend.
//!
//! # Components
//!
//! - [`MockTransformService`] - Transform service with scripted replies
//! - [`MockHistoryStore`] - In-memory history table with injectable failures
//! - [`RecordingNotifier`] - Notifier that captures every notification

pub mod mock_history;
pub mod mock_notifier;
pub mod mock_transform;

pub use mock_history::MockHistoryStore;
pub use mock_notifier::RecordingNotifier;
pub use mock_transform::MockTransformService;
