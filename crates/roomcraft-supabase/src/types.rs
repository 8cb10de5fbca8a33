// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types specific to the Supabase endpoints.

use serde::Deserialize;

/// Error body returned by edge functions and PostgREST.
///
/// Edge functions answer `{"error": "..."}`; PostgREST answers
/// `{"message": "...", "code": "...", ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The most specific message in the body, if any.
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Extract an error message from a raw response body.
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_function_error_field() {
        assert_eq!(
            error_message_from_body(r#"{"error":"Invalid image"}"#).as_deref(),
            Some("Invalid image")
        );
    }

    #[test]
    fn postgrest_message_field() {
        let body = r#"{"code":"42P01","message":"relation does not exist","details":null}"#;
        assert_eq!(
            error_message_from_body(body).as_deref(),
            Some("relation does not exist")
        );
    }

    #[test]
    fn non_json_or_blank_yields_none() {
        assert!(error_message_from_body("<html>bad gateway</html>").is_none());
        assert!(error_message_from_body(r#"{"error":"  "}"#).is_none());
    }
}
