// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `roomcraft history` command implementation.
//!
//! Lists recent transformations newest first, as a table or as JSON.

use std::io::IsTerminal;
use std::sync::Arc;

use roomcraft_config::RoomcraftConfig;
use roomcraft_core::{HistoryRecord, RoomcraftError};
use roomcraft_supabase::SupabaseBackend;
use roomcraft_transform::{HistoryReader, transformation_label};
use serde::Serialize;

/// One history entry in `--json` output.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub label: &'static str,
    pub transformation_type: String,
    pub style_name: Option<String>,
    pub original_image_url: String,
    pub transformed_image_url: String,
    pub created_at: String,
}

impl From<HistoryRecord> for HistoryEntry {
    fn from(record: HistoryRecord) -> Self {
        Self {
            id: record.id,
            label: transformation_label(&record.transformation_type),
            transformation_type: record.transformation_type,
            style_name: record.style_name,
            original_image_url: record.original_image_url,
            transformed_image_url: record.transformed_image_url,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Run the `roomcraft history` command.
pub async fn run_history(
    config: &RoomcraftConfig,
    json: bool,
    plain: bool,
) -> Result<(), RoomcraftError> {
    let backend = Arc::new(SupabaseBackend::new(&config.supabase)?);
    let reader = HistoryReader::with_limit(backend, config.history.limit);
    let records = reader.fetch_history().await;

    if json {
        let entries: Vec<HistoryEntry> = records.into_iter().map(HistoryEntry::from).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    print!("{}", format_history(&records, use_color));
    Ok(())
}

fn format_history(records: &[HistoryRecord], use_color: bool) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  roomcraft history");
    let _ = writeln!(out, "  {}", "-".repeat(35));
    if records.is_empty() {
        let _ = writeln!(out, "    (no transformations yet)");
    }
    for record in records {
        let date = record.created_at.format("%d.%m.%Y %H:%M");
        let label = transformation_label(&record.transformation_type);
        let label = if use_color {
            use colored::Colorize;
            label.bold().to_string()
        } else {
            label.to_string()
        };
        let style = record.style_name.as_deref().unwrap_or("-");
        let _ = writeln!(out, "    {date}  {label}  ({style})");
        let _ = writeln!(out, "      {}", record.transformed_image_url);
    }
    let _ = writeln!(out);
    out
}
