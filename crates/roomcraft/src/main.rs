// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Roomcraft - AI room redesign from the command line.
//!
//! This is the binary entry point for the Roomcraft client.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod history;
mod image;
mod notify;
mod transform;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roomcraft_config::RoomcraftConfig;
use roomcraft_core::FlowKind;

use crate::transform::TransformArgs;

/// Roomcraft - AI room redesign from the command line.
#[derive(Parser, Debug)]
#[command(name = "roomcraft", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Transform a room photo with one of the redesign flows.
    Transform {
        /// Flow to run (style-change, object-remove, color-change, garden-redesign,
        /// exterior-redesign, furniture-replace, fill-spaces, wall-refresh, floor-replace).
        #[arg(long)]
        flow: FlowKind,
        /// Path of the room photo.
        #[arg(long)]
        image: PathBuf,
        /// Design style, overriding `session.design_style`.
        #[arg(long)]
        style: Option<String>,
        /// Room type, overriding `session.room_type`.
        #[arg(long)]
        room: Option<String>,
        /// Color, overriding `session.selected_color`.
        #[arg(long)]
        color: Option<String>,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// List recent transformations.
    History {
        /// Output JSON instead of a table.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => roomcraft_config::load_and_validate_path(path),
        None => roomcraft_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            roomcraft_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Transform {
            flow,
            image,
            style,
            room,
            color,
            plain,
        }) => {
            let args = TransformArgs {
                flow,
                image,
                style,
                room,
                color,
                plain,
            };
            match transform::run_transform(&config, args).await {
                Ok(true) => Ok(()),
                Ok(false) => std::process::exit(2),
                Err(e) => Err(e),
            }
        }
        Some(Commands::History { json, plain }) => {
            history::run_history(&config, json, plain).await
        }
        Some(Commands::Config) => {
            print!("{}", render_config(&config));
            Ok(())
        }
        None => {
            println!("roomcraft: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roomcraft={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn render_config(config: &RoomcraftConfig) -> String {
    toml::to_string_pretty(config).unwrap_or_else(|e| format!("# failed to render config: {e}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = roomcraft_config::load_and_validate_str("").expect("defaults are valid");
        assert_eq!(config.session.initial_credits, 100);
    }

    #[test]
    fn rendered_config_round_trips() {
        let config = RoomcraftConfig::default();
        let text = render_config(&config);
        assert!(text.contains("[supabase]"));
        let reparsed = roomcraft_config::load_and_validate_str(&text).expect("rendered config loads");
        assert_eq!(reparsed.supabase.url, config.supabase.url);
        assert_eq!(reparsed.history.limit, config.history.limit);
    }

    #[test]
    fn cli_parses_transform() {
        let cli = Cli::try_parse_from([
            "roomcraft",
            "transform",
            "--flow",
            "object-remove",
            "--image",
            "room.jpg",
            "--color",
            "#112233",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Transform { flow, color, .. }) => {
                assert_eq!(flow, FlowKind::ObjectRemove);
                assert_eq!(color.as_deref(), Some("#112233"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_flow() {
        let err = Cli::try_parse_from(["roomcraft", "transform", "--flow", "attic", "--image", "x"]);
        assert!(err.is_err());
    }
}
