mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{load_settings, DataLocation};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{
    commands::BackendCommand,
    runtime::{launch, BridgeConfig},
};
use crate::controller::events::UiEvent;
use crate::ui::DirectoryApp;

#[derive(Parser, Debug)]
#[command(name = "people-gui", about = "Browse friends and family")]
struct Args {
    /// Dataset URL or path; defaults to the configured data source.
    #[arg(long)]
    source: Option<String>,
    /// Quiet period before free-text input triggers a query.
    #[arg(long)]
    debounce_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let mut settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();
    let args = Args::parse();
    if let Some(source) = args.source {
        settings.data_source = source;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        settings.debounce_ms = debounce_ms;
    }

    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = BridgeConfig {
        location: DataLocation::resolve(&settings.data_source, &base_dir),
        debounce: settings.debounce(),
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    launch(config, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Friends and Family")
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Friends and Family",
        options,
        Box::new(|_cc| Ok(Box::new(DirectoryApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop window: {err}"))
}
