// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams for the remote collaborators the client depends on.
//!
//! All adapters extend the [`RemoteAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod history;
pub mod notifier;
pub mod transform;

pub use adapter::RemoteAdapter;
pub use history::HistoryStore;
pub use notifier::Notifier;
pub use transform::TransformService;
