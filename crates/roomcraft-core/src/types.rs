// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared by the flow store, the orchestrator, and the adapters.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

/// Identifies one of the nine independent transformation wizards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FlowKind {
    StyleChange,
    ObjectRemove,
    ColorChange,
    GardenRedesign,
    ExteriorRedesign,
    FurnitureReplace,
    FillSpaces,
    WallRefresh,
    FloorReplace,
}

impl FlowKind {
    /// Every flow kind, in a stable order.
    pub const ALL: [FlowKind; 9] = [
        FlowKind::StyleChange,
        FlowKind::ObjectRemove,
        FlowKind::ColorChange,
        FlowKind::GardenRedesign,
        FlowKind::ExteriorRedesign,
        FlowKind::FurnitureReplace,
        FlowKind::FillSpaces,
        FlowKind::WallRefresh,
        FlowKind::FloorReplace,
    ];

    /// Position of this kind in [`FlowKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The action a wizard of this kind submits when the user runs it.
    pub const fn default_action(self) -> Action {
        match self {
            FlowKind::StyleChange => Action::Redesign,
            FlowKind::ObjectRemove => Action::Erase,
            FlowKind::ColorChange => Action::Recolor,
            FlowKind::GardenRedesign | FlowKind::ExteriorRedesign => Action::Exterior,
            FlowKind::FurnitureReplace => Action::Furniture,
            FlowKind::FillSpaces => Action::Fill,
            FlowKind::WallRefresh => Action::Wall,
            FlowKind::FloorReplace => Action::Floor,
        }
    }
}

/// The remote transformation operation requested.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Redesign,
    Erase,
    Recolor,
    Exterior,
    Furniture,
    Fill,
    Wall,
    Floor,
}

impl Action {
    /// Every action, in a stable order.
    pub const ALL: [Action; 8] = [
        Action::Redesign,
        Action::Erase,
        Action::Recolor,
        Action::Exterior,
        Action::Furniture,
        Action::Fill,
        Action::Wall,
        Action::Floor,
    ];

    /// Credits debited before the remote call is made.
    pub const fn credit_cost(self) -> u32 {
        match self {
            Action::Erase => 4,
            _ => 8,
        }
    }

    /// Semantic transformation type stored with each history record.
    pub const fn transformation_type(self) -> &'static str {
        match self {
            Action::Redesign => "style_change",
            Action::Erase => "object_remove",
            Action::Recolor => "color_change",
            Action::Exterior => "exterior_redesign",
            Action::Furniture => "furniture_replace",
            Action::Fill => "fill_spaces",
            Action::Wall => "wall_refresh",
            Action::Floor => "floor_replace",
        }
    }
}

/// Opaque reference to an image: a data URI, a local URI, or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single point of a freehand mask stroke, in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskPoint {
    pub x: f64,
    pub y: f64,
}

impl MaskPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One freehand stroke: an ordered sequence of points.
pub type MaskStroke = Vec<MaskPoint>;

/// Per-flow wizard state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowState {
    /// The picked or captured input image.
    pub source_image: Option<ImageRef>,
    /// The generated image, once a run succeeded.
    pub result_image: Option<ImageRef>,
    /// Freehand mask strokes (object removal only).
    pub mask_strokes: Vec<MaskStroke>,
}

impl FlowState {
    /// True when nothing has been recorded for this flow.
    pub fn is_empty(&self) -> bool {
        self.source_image.is_none() && self.result_image.is_none() && self.mask_strokes.is_empty()
    }
}

/// Body sent to the remote transform operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    pub image_base64: ImageRef,
    pub room_type: String,
    pub design_style: String,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Mask strokes serialized as a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_data: Option<String>,
}

/// Decoded reply of the remote transform operation.
///
/// Either `image_url` (and optionally `description`) or `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReply {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of one orchestrated transform run.
///
/// `success == true` implies `image_url` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransformResult {
    pub fn succeeded(image_url: ImageRef, description: Option<String>) -> Self {
        Self {
            success: true,
            image_url: Some(image_url),
            description,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image_url: None,
            description: None,
            error: Some(error.into()),
        }
    }
}

/// Row written to the history table after a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHistoryRecord {
    pub original_image_url: String,
    pub transformed_image_url: String,
    pub transformation_type: String,
    pub style_name: String,
    pub user_id: Option<String>,
}

/// A persisted transformation, as read back from the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub original_image_url: String,
    pub transformed_image_url: String,
    pub transformation_type: String,
    #[serde(default)]
    pub style_name: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Parses a row timestamp. Values without a UTC offset (a plain
/// `timestamp` column) are read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|t| t.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-facing notification (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}
