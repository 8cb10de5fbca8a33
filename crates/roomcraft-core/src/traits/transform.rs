// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transform service trait for the remote image transformation operation.

use async_trait::async_trait;

use crate::error::RoomcraftError;
use crate::traits::adapter::RemoteAdapter;
use crate::types::{TransformReply, TransformRequest};

/// Adapter for the single remote transformation operation.
///
/// The call is a black box: model invocation, cost, and retries on the remote
/// side are not this client's concern. Implementations must not retry.
#[async_trait]
pub trait TransformService: RemoteAdapter {
    /// Sends the full request body and returns the decoded reply.
    ///
    /// Transport-level failures are returned as `Err`; an application-level
    /// error is returned as `Ok` with [`TransformReply::error`] set.
    async fn transform(&self, request: &TransformRequest)
    -> Result<TransformReply, RoomcraftError>;
}
