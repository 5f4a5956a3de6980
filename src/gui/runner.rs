//! GUI runner - launches the chatdesk window

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};

use super::app::ChatDeskApp;
use super::theme::apply_theme;
use crate::client::{ModelCatalog, OpenAiCatalog};
use crate::config::{CredentialStore, SettingsStore};
use crate::logs::{LogBroadcaster, VerbosityControl};

/// Run the main GUI application
pub fn run_gui(
    work_dir: PathBuf,
    broadcaster: LogBroadcaster,
    verbosity: VerbosityControl,
) -> Result<()> {
    let work_dir = if work_dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        work_dir
    };

    let settings_path = SettingsStore::default_path(&work_dir);
    let settings_store = match SettingsStore::load(&settings_path) {
        Ok(store) => store,
        Err(e) => {
            warn!("{}. Starting with empty settings.", e);
            SettingsStore::empty(&settings_path)
        }
    };

    let credentials = CredentialStore::from_env();
    let catalog: Arc<dyn ModelCatalog> = Arc::new(OpenAiCatalog::new(credentials.clone()));

    let settings_display = settings_store.path().display().to_string();
    let app = ChatDeskApp::new(
        work_dir,
        settings_store,
        credentials,
        catalog,
        &broadcaster,
        verbosity,
    );
    // Logged after the app exists so the debug view receives it
    info!("Starting GUI with settings from {}", settings_display);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("chatdesk")
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "chatdesk",
        options,
        Box::new(|cc| {
            apply_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
