//! Main GUI application using egui
//!
//! A small main window summarizing the active configuration, with buttons
//! for the client settings dialog, the general settings dialog and the
//! debug view.

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, RichText};

use super::debug_view::DebugView;
use super::general::{DialogOutcome, GeneralSettingsDialog};
use super::settings::{render_client_settings, ClientSettingsState};
use super::theme::{ACCENT_CYAN, BG_PRIMARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::client::ModelCatalog;
use crate::config::{
    CredentialStore, GeneralSettings, SettingsStore, DEFAULT_API_VERSION, KEY_API_VERSION,
    KEY_MODEL,
};
use crate::logs::{LogBroadcaster, VerbosityControl};
use crate::CredentialField;

pub struct ChatDeskApp {
    pub(super) work_dir: PathBuf,
    pub(super) settings_store: SettingsStore,
    pub(super) credentials: CredentialStore,
    pub(super) catalog: Arc<dyn ModelCatalog>,
    pub(super) general: GeneralSettings,
    pub(super) client_dialog: Option<ClientSettingsState>,
    pub(super) general_dialog: Option<GeneralSettingsDialog>,
    pub(super) debug_view: DebugView,
}

impl ChatDeskApp {
    pub fn new(
        work_dir: PathBuf,
        settings_store: SettingsStore,
        credentials: CredentialStore,
        catalog: Arc<dyn ModelCatalog>,
        broadcaster: &LogBroadcaster,
        verbosity: VerbosityControl,
    ) -> Self {
        Self {
            work_dir,
            settings_store,
            credentials,
            catalog,
            general: GeneralSettings::default(),
            client_dialog: None,
            general_dialog: None,
            debug_view: DebugView::new(broadcaster, verbosity),
        }
    }

    /// Open the client settings dialog with fresh state and start listing
    /// models for the stored client type
    pub fn open_client_settings(&mut self) {
        let mut state = ClientSettingsState::from_store(&self.settings_store, &self.credentials);
        state.refresh_models(Arc::clone(&self.catalog));
        self.client_dialog = Some(state);
    }

    pub fn open_general_settings(&mut self) {
        self.general_dialog = Some(GeneralSettingsDialog::new(&self.general));
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("CHATDESK").monospace().strong().color(TEXT_PRIMARY));
                ui.separator();
                if ui.button("⚙ Settings").clicked() {
                    self.open_client_settings();
                }
                if ui.button("General").clicked() {
                    self.open_general_settings();
                }
                let label = if self.debug_view.open { "Hide Debug View" } else { "Debug View" };
                if ui.button(label).clicked() {
                    self.debug_view.open = !self.debug_view.open;
                }
            });
        });
    }

    fn render_summary(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                let store = &self.settings_store;
                let client = store.client_type();

                ui.label(RichText::new("CHAT COMPLETION").monospace().color(TEXT_MUTED));
                egui::Grid::new("summary_grid")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        summary_row(ui, "Client", client.as_str());
                        summary_row(ui, "Model", store.get_or_default(KEY_MODEL, "-"));
                        if client.uses_api_version() {
                            summary_row(
                                ui,
                                "API version",
                                store.get_or_default(KEY_API_VERSION, DEFAULT_API_VERSION),
                            );
                        }
                        for field in client.required_fields() {
                            let value = self.credentials.display_value(*field);
                            summary_row(
                                ui,
                                field.label(),
                                if value.is_empty() { "(not set)" } else { &value },
                            );
                        }
                    });

                ui.add_space(16.0);
                ui.label(RichText::new("GENERAL").monospace().color(TEXT_MUTED));
                egui::Grid::new("general_grid")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        summary_row(ui, "Thread timeout", &format!("{}s", self.general.thread_timeout));
                        summary_row(ui, "Run timeout", &format!("{}s", self.general.run_timeout));
                        summary_row(
                            ui,
                            "Friendly thread names",
                            if self.general.use_chat_completion_for_thread_name { "on" } else { "off" },
                        );
                    });

                ui.add_space(16.0);
                ui.label(
                    RichText::new(format!("Settings file: {}", store.path().display()))
                        .small()
                        .color(TEXT_MUTED),
                );
                ui.label(
                    RichText::new(format!("Working directory: {}", self.work_dir.display()))
                        .small()
                        .color(TEXT_MUTED),
                );
                if self.credentials.get(CredentialField::OpenAiKey).is_none()
                    && self.credentials.get(CredentialField::AzureKey).is_none()
                {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("No API key configured. Open ⚙ Settings to add one.")
                            .color(ACCENT_CYAN),
                    );
                }
            });
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        render_client_settings(
            ctx,
            &mut self.client_dialog,
            &mut self.settings_store,
            &self.credentials,
            &self.catalog,
        );

        if let Some(dialog) = self.general_dialog.as_mut() {
            match dialog.render(ctx, &mut self.general) {
                DialogOutcome::Open => {}
                DialogOutcome::Accepted | DialogOutcome::Cancelled => self.general_dialog = None,
            }
        }

        self.debug_view.render(ctx);
    }
}

fn summary_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).color(TEXT_DIM));
    ui.label(RichText::new(value).monospace().color(TEXT_PRIMARY));
    ui.end_row();
}

impl eframe::App for ChatDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Marshal broadcast log lines onto the UI thread
        if self.debug_view.drain() > 0 && self.debug_view.open {
            ctx.request_repaint();
        }

        self.render_toolbar(ctx);
        self.render_dialogs(ctx);
        self.render_summary(ctx);

        // Lines may arrive from other threads while the UI is idle
        if self.debug_view.open {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
