// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock transform service for deterministic testing.
//!
//! `MockTransformService` implements `TransformService` with scripted replies,
//! records every request it receives, and can hold calls open until the test
//! releases them.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use roomcraft_core::traits::adapter::RemoteAdapter;
use roomcraft_core::traits::transform::TransformService;
use roomcraft_core::types::{TransformReply, TransformRequest};
use roomcraft_core::RoomcraftError;

/// Image URL returned when the reply queue is empty.
pub const DEFAULT_IMAGE_URL: &str = "https://mock.invalid/transformed.jpg";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock transform service that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, a
/// successful reply carrying [`DEFAULT_IMAGE_URL`] is returned.
pub struct MockTransformService {
    replies: Mutex<VecDeque<Result<TransformReply, RoomcraftError>>>,
    requests: Mutex<Vec<TransformRequest>>,
    delay: Option<Duration>,
    held: watch::Sender<bool>,
}

impl MockTransformService {
    /// Create a new mock with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            delay: None,
            held: watch::channel(false).0,
        }
    }

    /// Create a mock whose first reply is a success with `image_url`.
    pub fn replying_with(image_url: &str) -> Self {
        let mock = Self::new();
        mock.push_image(image_url);
        mock
    }

    /// Sleep for `delay` before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a raw reply or transport error.
    pub fn push_reply(&self, reply: Result<TransformReply, RoomcraftError>) {
        lock(&self.replies).push_back(reply);
    }

    /// Queue a successful reply carrying `image_url`.
    pub fn push_image(&self, image_url: &str) {
        self.push_reply(Ok(TransformReply {
            image_url: Some(image_url.to_string()),
            description: None,
            error: None,
        }));
    }

    /// Queue an application-level error reply.
    pub fn push_error_reply(&self, message: &str) {
        self.push_reply(Ok(TransformReply {
            error: Some(message.to_string()),
            ..TransformReply::default()
        }));
    }

    /// Queue a transport failure.
    pub fn push_transport_error(&self, message: &str) {
        self.push_reply(Err(RoomcraftError::transport(message)));
    }

    /// Hold every call open until [`release`](Self::release) is called.
    pub fn hold(&self) {
        self.held.send_replace(true);
    }

    /// Let held calls proceed.
    pub fn release(&self) {
        self.held.send_replace(false);
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<TransformRequest> {
        lock(&self.requests).clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

impl Default for MockTransformService {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteAdapter for MockTransformService {
    fn name(&self) -> &str {
        "mock-transform"
    }
}

#[async_trait]
impl TransformService for MockTransformService {
    async fn transform(
        &self,
        request: &TransformRequest,
    ) -> Result<TransformReply, RoomcraftError> {
        lock(&self.requests).push(request.clone());

        let mut held = self.held.subscribe();
        // The sender lives in `self`, so this only ends on release.
        let _ = held.wait_for(|h| !*h).await;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        lock(&self.replies).pop_front().unwrap_or_else(|| {
            Ok(TransformReply {
                image_url: Some(DEFAULT_IMAGE_URL.to_string()),
                description: None,
                error: None,
            })
        })
    }
}
