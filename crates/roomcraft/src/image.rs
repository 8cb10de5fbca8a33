// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local image capture: read an image file into a JPEG data URI.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use roomcraft_core::{ImageRef, RoomcraftError};
use tracing::debug;

/// Prefix of every image sent to the transform service.
pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode raw image bytes as a `data:image/jpeg;base64,` URI.
pub fn encode_data_uri(bytes: &[u8]) -> ImageRef {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(bytes, &mut uri);
    ImageRef(uri)
}

/// Read the file at `path` and encode it as a data URI.
pub async fn read_image(path: &Path) -> Result<ImageRef, RoomcraftError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| RoomcraftError::Image {
            message: format!("failed to read image {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;
    if bytes.is_empty() {
        return Err(RoomcraftError::Image {
            message: format!("image {} is empty", path.display()),
            source: None,
        });
    }
    debug!(path = %path.display(), bytes = bytes.len(), "image loaded");
    Ok(encode_data_uri(&bytes))
}
