// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as URL schemes, non-empty names, and bounded progress parameters.

use crate::diagnostic::ConfigError;
use crate::model::RoomcraftConfig;

/// Largest history page the client will ask for.
pub const MAX_HISTORY_LIMIT: usize = 50;

/// Highest value synthetic progress may reach before the call resolves.
pub const MAX_PROGRESS_CEILING: f64 = 90.0;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RoomcraftConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let url = config.supabase.url.trim();
    if url.is_empty() {
        fail("supabase.url must not be empty".to_string());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        fail(format!(
            "supabase.url `{url}` must start with http:// or https://"
        ));
    }

    if config.supabase.transform_function.trim().is_empty() {
        fail("supabase.transform_function must not be empty".to_string());
    }

    if config.supabase.history_table.trim().is_empty() {
        fail("supabase.history_table must not be empty".to_string());
    }

    if config.supabase.timeout_secs == 0 {
        fail("supabase.timeout_secs must be greater than 0".to_string());
    }

    if config.progress.tick_interval_ms == 0 {
        fail("progress.tick_interval_ms must be greater than 0".to_string());
    }

    let increment = config.progress.max_increment;
    if !increment.is_finite() || increment <= 0.0 {
        fail(format!(
            "progress.max_increment must be positive, got {increment}"
        ));
    }

    let ceiling = config.progress.ceiling;
    if !ceiling.is_finite() || ceiling <= 0.0 || ceiling > MAX_PROGRESS_CEILING {
        fail(format!(
            "progress.ceiling must be greater than 0 and at most {MAX_PROGRESS_CEILING}, got {ceiling}"
        ));
    }

    let limit = config.history.limit;
    if limit == 0 || limit > MAX_HISTORY_LIMIT {
        fail(format!(
            "history.limit must be between 1 and {MAX_HISTORY_LIMIT}, got {limit}"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
