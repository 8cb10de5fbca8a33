// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal notifier: prints notifications to stderr.

use colored::Colorize;
use roomcraft_core::{Notification, NotificationKind, Notifier};

/// Prints each notification as one line, colored when attached to a terminal.
pub struct TerminalNotifier {
    use_color: bool,
}

impl TerminalNotifier {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", format_notification(&notification, self.use_color));
    }
}

fn format_notification(notification: &Notification, use_color: bool) -> String {
    let Notification {
        kind,
        title,
        message,
    } = notification;
    match (kind, use_color) {
        (NotificationKind::Success, true) => format!("{} {}: {message}", "✓".green(), title.green()),
        (NotificationKind::Error, true) => format!("{} {}: {message}", "✗".red(), title.red()),
        (NotificationKind::Success, false) => format!("[OK] {title}: {message}"),
        (NotificationKind::Error, false) => format!("[FAIL] {title}: {message}"),
    }
}
