// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `roomcraft transform` command implementation.
//!
//! Loads a local image into the chosen flow, applies any selection
//! overrides, and runs the flow's default action against the Supabase
//! backend while printing progress.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use roomcraft_config::RoomcraftConfig;
use roomcraft_core::{FlowKind, RoomcraftError};
use roomcraft_state::RoomStore;
use roomcraft_supabase::SupabaseBackend;
use roomcraft_transform::{
    PROGRESS_COMPLETE, ProgressSettings, RunOutcome, TransformOrchestrator, run_active_flow,
};
use tokio::sync::watch;
use tracing::info;

use crate::image::read_image;
use crate::notify::TerminalNotifier;

/// Arguments of a single transform run.
#[derive(Debug, Clone)]
pub struct TransformArgs {
    pub flow: FlowKind,
    pub image: PathBuf,
    pub style: Option<String>,
    pub room: Option<String>,
    pub color: Option<String>,
    pub plain: bool,
}

/// Run the `roomcraft transform` command.
///
/// Returns whether the transform succeeded.
pub async fn run_transform(
    config: &RoomcraftConfig,
    args: TransformArgs,
) -> Result<bool, RoomcraftError> {
    let use_color = !args.plain && std::io::stderr().is_terminal();
    let source = read_image(&args.image).await?;

    let mut store = RoomStore::new(&config.session);
    store.set_active_flow(args.flow);
    store.set_original_image(Some(source));
    if let Some(style) = args.style {
        store.set_design_style(style);
    }
    if let Some(room) = args.room {
        store.set_room_type(room);
    }
    if let Some(color) = args.color {
        store.set_selected_color(color);
    }
    let store = store.into_shared();

    let backend = Arc::new(SupabaseBackend::new(&config.supabase)?);
    let orchestrator = TransformOrchestrator::new(
        backend.clone(),
        backend,
        Arc::new(TerminalNotifier::new(use_color)),
        ProgressSettings::from(&config.progress),
    );

    info!(flow = %args.flow, action = %args.flow.default_action(), "starting transform");
    let progress = tokio::spawn(print_progress(orchestrator.subscribe_progress()));
    let outcome = run_active_flow(&store, &orchestrator).await;
    progress.abort();
    eprintln!();

    let credits = store.lock().await.credits();
    match outcome {
        RunOutcome::Succeeded(result) => {
            if let Some(url) = result.image_url {
                println!("{url}");
            }
            if let Some(description) = result.description {
                eprintln!("  {description}");
            }
            eprintln!("  credits left: {credits}");
            Ok(true)
        }
        RunOutcome::Failed(_) => {
            eprintln!("  credits left: {credits}");
            Ok(false)
        }
        RunOutcome::InsufficientCredits {
            required,
            available,
        } => {
            eprintln!("  insufficient credits: {required} required, {available} available");
            Ok(false)
        }
        RunOutcome::MissingSourceImage => Err(RoomcraftError::Internal(
            "no source image for the selected flow".to_string(),
        )),
    }
}

/// Print progress updates on one stderr line until completion.
async fn print_progress(mut rx: watch::Receiver<f64>) {
    while rx.changed().await.is_ok() {
        let value = *rx.borrow_and_update();
        eprint!("\r  {:>3.0}%", value);
        if value >= PROGRESS_COMPLETE {
            break;
        }
    }
}
