// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Roomcraft client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Roomcraft configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoomcraftConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Backend project settings (transform function and history table).
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// Initial session selections and credit seed.
    #[serde(default)]
    pub session: SessionConfig,

    /// Synthetic progress ticker settings.
    #[serde(default)]
    pub progress: ProgressConfig,

    /// History listing settings.
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Process-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Backend project configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://abcd.supabase.co`.
    #[serde(default = "default_supabase_url")]
    pub url: String,

    /// Public anon key. `None` sends unauthenticated requests.
    #[serde(default)]
    pub anon_key: Option<String>,

    /// Name of the edge function performing the transformation.
    #[serde(default = "default_transform_function")]
    pub transform_function: String,

    /// Table holding the transformation history.
    #[serde(default = "default_history_table")]
    pub history_table: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: default_supabase_url(),
            anon_key: None,
            transform_function: default_transform_function(),
            history_table: default_history_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_supabase_url() -> String {
    "http://127.0.0.1:54321".to_string()
}

fn default_transform_function() -> String {
    "transform-room".to_string()
}

fn default_history_table() -> String {
    "room_transformations".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Initial values of the shared session state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Credit balance the store starts with.
    #[serde(default = "default_initial_credits")]
    pub initial_credits: u32,

    /// Initially selected room type.
    #[serde(default = "default_room_type")]
    pub room_type: String,

    /// Initially selected design style.
    #[serde(default = "default_design_style")]
    pub design_style: String,

    /// Initially selected color (hex).
    #[serde(default = "default_selected_color")]
    pub selected_color: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_credits: default_initial_credits(),
            room_type: default_room_type(),
            design_style: default_design_style(),
            selected_color: default_selected_color(),
        }
    }
}

fn default_initial_credits() -> u32 {
    100
}

fn default_room_type() -> String {
    "Oturma Odası".to_string()
}

fn default_design_style() -> String {
    "Modern".to_string()
}

fn default_selected_color() -> String {
    "#E86A12".to_string()
}

/// Synthetic progress ticker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressConfig {
    /// Milliseconds between two progress increments.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Upper bound of one random increment, in percent.
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,

    /// Progress never passes this value while the call is outstanding.
    #[serde(default = "default_ceiling")]
    pub ceiling: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_increment: default_max_increment(),
            ceiling: default_ceiling(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    500
}

fn default_max_increment() -> f64 {
    15.0
}

fn default_ceiling() -> f64 {
    90.0
}

/// History listing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Maximum number of records fetched for display.
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_history_limit(),
        }
    }
}

fn default_history_limit() -> usize {
    50
}
