// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed display strings derived from actions and transformation types.

use roomcraft_core::Action;

/// Style name stored with a history record.
///
/// Redesign keeps the bare style, erase has a fixed name, recolor names the
/// color when one was chosen, and the remaining actions prefix the style
/// with the area they change.
pub fn style_name(action: Action, design_style: &str, color: Option<&str>) -> String {
    match action {
        Action::Redesign => design_style.to_string(),
        Action::Erase => "Obje Silme".to_string(),
        Action::Recolor => match color {
            Some(color) if !color.is_empty() => format!("Renk: {color}"),
            _ => "Renk Değişikliği".to_string(),
        },
        Action::Exterior => format!("Dış Cephe: {design_style}"),
        Action::Furniture => format!("Mobilya: {design_style}"),
        Action::Fill => format!("Boşluk Doldur: {design_style}"),
        Action::Wall => format!("Duvar: {design_style}"),
        Action::Floor => format!("Zemin: {design_style}"),
    }
}

/// Human-readable label for a stored transformation type.
pub fn transformation_label(transformation_type: &str) -> &'static str {
    match transformation_type {
        "style_change" => "Stil Değişikliği",
        "color_change" => "Renk Değişikliği",
        "object_remove" => "Nesne Silme",
        "exterior_redesign" => "Dış Cephe",
        "furniture_replace" => "Mobilya Değişikliği",
        "fill_spaces" => "Boşluk Doldurma",
        "wall_refresh" => "Duvar Yenileme",
        "floor_replace" => "Zemin Değişikliği",
        _ => "Dönüşüm",
    }
}
