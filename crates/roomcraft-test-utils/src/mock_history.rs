// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory history table for deterministic testing.
//!
//! `MockHistoryStore` records inserted rows and serves a fixed list of
//! records back. `recent` returns the stored records in insertion order and
//! ignores the limit, so callers' own ordering and truncation are exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use roomcraft_core::traits::adapter::RemoteAdapter;
use roomcraft_core::traits::history::HistoryStore;
use roomcraft_core::types::{HistoryRecord, NewHistoryRecord};
use roomcraft_core::RoomcraftError;

/// A history store backed by vectors, with switchable failures.
#[derive(Default)]
pub struct MockHistoryStore {
    records: Mutex<Vec<HistoryRecord>>,
    inserted: Mutex<Vec<NewHistoryRecord>>,
    fail_inserts: AtomicBool,
    fail_queries: AtomicBool,
}

impl MockHistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that serves `records` from `recent`.
    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every subsequent insert fail.
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent query fail.
    pub fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    /// Rows successfully inserted so far.
    pub fn inserted(&self) -> Vec<NewHistoryRecord> {
        self.inserted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RemoteAdapter for MockHistoryStore {
    fn name(&self) -> &str {
        "mock-history"
    }
}

#[async_trait]
impl HistoryStore for MockHistoryStore {
    async fn insert(&self, record: &NewHistoryRecord) -> Result<(), RoomcraftError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(RoomcraftError::history("mock insert failure"));
        }
        self.inserted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<HistoryRecord>, RoomcraftError> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(RoomcraftError::history("mock query failure"));
        }
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
