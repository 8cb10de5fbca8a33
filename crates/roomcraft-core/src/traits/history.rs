// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! History store trait for the hosted transformation history table.

use async_trait::async_trait;

use crate::error::RoomcraftError;
use crate::traits::adapter::RemoteAdapter;
use crate::types::{HistoryRecord, NewHistoryRecord};

/// Adapter for the remote table holding past transformations.
#[async_trait]
pub trait HistoryStore: RemoteAdapter {
    /// Inserts one history row.
    async fn insert(&self, record: &NewHistoryRecord) -> Result<(), RoomcraftError>;

    /// Returns up to `limit` records, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<HistoryRecord>, RoomcraftError>;
}
