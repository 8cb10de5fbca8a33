// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Roomcraft room redesign client.
//!
//! This crate provides the data model, the error type, and the trait seams
//! for the remote collaborators (transform service, history table, and the
//! user notification sink). Adapter crates implement the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RoomcraftError;
pub use types::{
    Action, FlowKind, FlowState, HistoryRecord, ImageRef, MaskPoint, MaskStroke,
    NewHistoryRecord, Notification, NotificationKind, TransformReply, TransformRequest,
    TransformResult,
};

pub use traits::{HistoryStore, Notifier, RemoteAdapter, TransformService};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use chrono::Timelike;

    use super::*;

    #[test]
    fn flow_kind_has_nine_distinct_variants() {
        let set: HashSet<_> = FlowKind::ALL.iter().collect();
        assert_eq!(set.len(), 9);
        for (i, kind) in FlowKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn flow_kind_display_and_parse() {
        for kind in FlowKind::ALL {
            let parsed = FlowKind::from_str(&kind.to_string()).expect("should parse back");
            assert_eq!(kind, parsed);
        }
        assert_eq!(FlowKind::ObjectRemove.to_string(), "object-remove");
    }

    #[test]
    fn action_lookup_table_is_fixed() {
        let expected = [
            (Action::Redesign, "style_change", 8),
            (Action::Erase, "object_remove", 4),
            (Action::Recolor, "color_change", 8),
            (Action::Exterior, "exterior_redesign", 8),
            (Action::Furniture, "furniture_replace", 8),
            (Action::Fill, "fill_spaces", 8),
            (Action::Wall, "wall_refresh", 8),
            (Action::Floor, "floor_replace", 8),
        ];
        assert_eq!(expected.len(), Action::ALL.len());
        for (action, kind, cost) in expected {
            assert_eq!(action.transformation_type(), kind);
            assert_eq!(action.credit_cost(), cost);
        }
    }

    #[test]
    fn action_wire_name_is_lowercase() {
        let json = serde_json::to_string(&Action::Erase).unwrap();
        assert_eq!(json, "\"erase\"");
        assert_eq!(Action::from_str("floor").unwrap(), Action::Floor);
    }

    #[test]
    fn default_actions_per_flow() {
        assert_eq!(FlowKind::StyleChange.default_action(), Action::Redesign);
        assert_eq!(FlowKind::ObjectRemove.default_action(), Action::Erase);
        assert_eq!(FlowKind::ColorChange.default_action(), Action::Recolor);
        assert_eq!(FlowKind::GardenRedesign.default_action(), Action::Exterior);
        assert_eq!(FlowKind::FloorReplace.default_action(), Action::Floor);
    }

    #[test]
    fn transform_request_serializes_camel_case() {
        let request = TransformRequest {
            image_base64: ImageRef::from("data:image/jpeg;base64,AAAA"),
            room_type: "Mutfak".into(),
            design_style: "Modern".into(),
            action: Action::Recolor,
            color: Some("#E86A12".into()),
            mask_data: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["imageBase64"], "data:image/jpeg;base64,AAAA");
        assert_eq!(value["roomType"], "Mutfak");
        assert_eq!(value["designStyle"], "Modern");
        assert_eq!(value["action"], "recolor");
        assert_eq!(value["color"], "#E86A12");
        assert!(value.get("maskData").is_none());
    }

    #[test]
    fn transform_reply_accepts_error_only_body() {
        let reply: TransformReply = serde_json::from_str(r#"{"error":"quota"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("quota"));
        assert!(reply.image_url.is_none());
    }

    #[test]
    fn succeeded_result_always_carries_image() {
        let ok = TransformResult::succeeded(ImageRef::from("https://x/y.png"), None);
        assert!(ok.success);
        assert!(ok.image_url.is_some());
        assert!(ok.error.is_none());

        let failed = TransformResult::failed("boom");
        assert!(!failed.success);
        assert!(failed.image_url.is_none());
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }

    #[test]
    fn history_record_parses_postgrest_timestamp() {
        let json = r#"{
            "id": "0b6f",
            "original_image_url": "data:image/jpeg;base64,AA",
            "transformed_image_url": "https://cdn/x.png",
            "transformation_type": "object_remove",
            "style_name": null,
            "created_at": "2026-03-01T10:15:30.123456+00:00"
        }"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.transformation_type, "object_remove");
        assert!(record.style_name.is_none());
        assert_eq!(record.created_at.to_rfc3339().get(..19), Some("2026-03-01T10:15:30"));
    }

    #[test]
    fn history_record_accepts_timestamp_without_offset() {
        let json = r#"{
            "id": "0b70",
            "original_image_url": "X",
            "transformed_image_url": "Y",
            "transformation_type": "wall_refresh",
            "created_at": "2026-03-01T10:15:30.123456"
        }"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.created_at.to_rfc3339().get(..19), Some("2026-03-01T10:15:30"));

        let spaced = types::parse_timestamp("2026-03-01 10:15:30").unwrap();
        assert_eq!(spaced, record.created_at.with_nanosecond(0).unwrap());
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        assert!(types::parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn empty_flow_state() {
        let state = FlowState::default();
        assert!(state.is_empty());
        let with_image = FlowState {
            source_image: Some("a".into()),
            ..FlowState::default()
        };
        assert!(!with_image.is_empty());
    }
}
