// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing notification sink.

use crate::types::Notification;

/// Receives user-visible notifications (toasts, banners, terminal lines).
///
/// Delivery is fire-and-forget: a notifier must not block or fail the caller.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}
