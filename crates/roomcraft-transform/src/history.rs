// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort history writes and the history reader.
//!
//! Both directions absorb their own failures: a failed insert is logged and
//! never reaches the transform result, and a failed fetch yields an empty list.

use std::sync::Arc;

use roomcraft_core::{HistoryRecord, HistoryStore, ImageRef, NewHistoryRecord, TransformRequest};
use tracing::{debug, info, warn};

use crate::labels::style_name;

/// Default number of records fetched for display.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Build the row persisted for a successful transform of `request`.
pub fn history_record_for(request: &TransformRequest, transformed: &ImageRef) -> NewHistoryRecord {
    NewHistoryRecord {
        original_image_url: request.image_base64.as_str().to_string(),
        transformed_image_url: transformed.as_str().to_string(),
        transformation_type: request.action.transformation_type().to_string(),
        style_name: style_name(
            request.action,
            &request.design_style,
            request.color.as_deref(),
        ),
        user_id: None,
    }
}

/// Persist a history row, logging and swallowing any failure.
///
/// Returns whether the row was stored, for callers that want to report it.
pub async fn record_transformation(
    store: &dyn HistoryStore,
    request: &TransformRequest,
    transformed: &ImageRef,
) -> bool {
    let record = history_record_for(request, transformed);
    match store.insert(&record).await {
        Ok(()) => {
            info!(
                transformation_type = %record.transformation_type,
                style_name = %record.style_name,
                "transformation saved to history"
            );
            true
        }
        Err(e) => {
            warn!(
                store = store.name(),
                error = %e,
                "failed to save transformation to history (non-fatal)"
            );
            false
        }
    }
}

/// Read-only view over the remote history table.
#[derive(Clone)]
pub struct HistoryReader {
    store: Arc<dyn HistoryStore>,
    limit: usize,
}

impl HistoryReader {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self::with_limit(store, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(store: Arc<dyn HistoryStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Newest-first list of at most `limit` records; empty on any failure.
    pub async fn fetch_history(&self) -> Vec<HistoryRecord> {
        match self.store.recent(self.limit).await {
            Ok(mut records) => {
                // The store is asked for this order; enforce it regardless.
                records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                records.truncate(self.limit);
                debug!(count = records.len(), "history fetched");
                records
            }
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "failed to fetch history");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use roomcraft_core::Action;
    use roomcraft_test_utils::MockHistoryStore;

    use super::*;

    fn request(action: Action) -> TransformRequest {
        TransformRequest {
            image_base64: ImageRef::from("data:image/jpeg;base64,X"),
            room_type: "Mutfak".into(),
            design_style: "Modern".into(),
            action,
            color: Some("#E86A12".into()),
            mask_data: None,
        }
    }

    fn record(id: &str, hour: u32) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            original_image_url: "a".into(),
            transformed_image_url: "b".into(),
            transformation_type: "style_change".into(),
            style_name: Some("Modern".into()),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn record_uses_lookup_tables() {
        let row = history_record_for(&request(Action::Recolor), &ImageRef::from("Y"));
        assert_eq!(row.original_image_url, "data:image/jpeg;base64,X");
        assert_eq!(row.transformed_image_url, "Y");
        assert_eq!(row.transformation_type, "color_change");
        assert_eq!(row.style_name, "Renk: #E86A12");
        assert!(row.user_id.is_none());
    }

    #[tokio::test]
    async fn insert_failure_is_swallowed() {
        let store = MockHistoryStore::new();
        store.fail_inserts(true);
        let saved =
            record_transformation(&store, &request(Action::Erase), &ImageRef::from("Y")).await;
        assert!(!saved);
        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn fetch_sorts_newest_first() {
        let store = Arc::new(MockHistoryStore::with_records(vec![
            record("mid", 10),
            record("old", 8),
            record("new", 12),
        ]));
        let reader = HistoryReader::new(store);
        let ids: Vec<_> = reader
            .fetch_history()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn fetch_respects_limit() {
        let records = (0..10).map(|h| record(&format!("r{h}"), h)).collect();
        let store = Arc::new(MockHistoryStore::with_records(records));
        let reader = HistoryReader::with_limit(store, 3);
        let fetched = reader.fetch_history().await;
        assert_eq!(fetched.len(), 3);
        assert_eq!(fetched[0].id, "r9");
    }

    #[tokio::test]
    async fn fetch_failure_yields_empty_list() {
        let store = Arc::new(MockHistoryStore::new());
        store.fail_queries(true);
        let reader = HistoryReader::new(store);
        assert!(reader.fetch_history().await.is_empty());
    }
}
