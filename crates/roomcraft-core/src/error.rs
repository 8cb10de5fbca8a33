// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Roomcraft client core.

use thiserror::Error;

/// The primary error type used across Roomcraft traits and core operations.
#[derive(Debug, Error)]
pub enum RoomcraftError {
    /// Configuration errors (invalid URL, missing key, bad header value).
    #[error("configuration error: {0}")]
    Config(String),

    /// The remote call could not be completed (connection, timeout, non-2xx, bad body).
    #[error("{message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The transform service answered with an application-level `error` field.
    #[error("{message}")]
    Remote { message: String },

    /// Writing or reading transformation history failed.
    #[error("history error: {message}")]
    History {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A local image could not be read or encoded.
    #[error("image error: {message}")]
    Image {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RoomcraftError {
    /// Shorthand for a transport error without an underlying source.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a history error without an underlying source.
    pub fn history(message: impl Into<String>) -> Self {
        Self::History {
            message: message.into(),
            source: None,
        }
    }
}
