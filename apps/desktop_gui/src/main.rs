use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
#[cfg(test)]
mod test_support;
mod ui;

use anyhow::{anyhow, Context};
use catalog_client::{CatalogApi, HttpCatalogClient};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::DesktopGuiApp;

fn main() -> anyhow::Result<()> {
    let args = config::Args::parse();
    let settings = config::load_settings(&args)?;
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    tracing::info!(api_base_url = %settings.api_base_url, "starting cookie admin");

    let api: Arc<dyn CatalogApi> = Arc::new(
        HttpCatalogClient::new(&settings.api_base_url)
            .context("failed to build catalog service client")?,
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let _worker = backend_bridge::runtime::launch(cmd_rx, ui_tx, api);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cookie Store Management")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    let api_base_url = settings.api_base_url.clone();
    eframe::run_native(
        "Cookie Store Management",
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::bootstrap(cmd_tx, ui_rx, api_base_url)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
