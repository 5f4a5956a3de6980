//! General settings dialog
//!
//! Edits the main window's timeouts and thread-naming flag. Values only
//! replace the window's settings when both timeouts parse.

use eframe::egui::{self, RichText};
use tracing::info;

use super::settings::{render_labeled_field, render_status_message};
use super::theme::TEXT_DIM;
use crate::config::{GeneralSettings, GeneralSettingsForm};

pub struct GeneralSettingsDialog {
    form: GeneralSettingsForm,
    status: Option<(String, bool)>,
}

/// Outcome of one frame of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Accepted,
    Cancelled,
}

impl GeneralSettingsDialog {
    pub fn new(settings: &GeneralSettings) -> Self {
        Self {
            form: GeneralSettingsForm::from_settings(settings),
            status: None,
        }
    }

    pub fn form_mut(&mut self) -> &mut GeneralSettingsForm {
        &mut self.form
    }

    /// OK button: commit into `target` or keep the dialog open with a message
    pub fn accept(&mut self, target: &mut GeneralSettings) -> DialogOutcome {
        match self.form.commit(target) {
            Ok(()) => {
                info!(
                    thread_timeout = target.thread_timeout,
                    run_timeout = target.run_timeout,
                    "Updated general settings"
                );
                DialogOutcome::Accepted
            }
            Err(e) => {
                self.status = Some((format!("Invalid Input: {}", e), true));
                DialogOutcome::Open
            }
        }
    }

    pub fn render(&mut self, ctx: &egui::Context, target: &mut GeneralSettings) -> DialogOutcome {
        let mut open = true;
        let mut ok_clicked = false;
        let mut cancel_clicked = false;

        egui::Window::new("General Settings")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                render_labeled_field(
                    ui,
                    "Thread Timeout (s):",
                    &mut self.form.thread_timeout,
                    "",
                    true,
                );
                render_labeled_field(
                    ui,
                    "Run Timeout (s):",
                    &mut self.form.run_timeout,
                    "",
                    true,
                );
                ui.checkbox(
                    &mut self.form.use_chat_completion_for_thread_name,
                    RichText::new("Enable chat completion for friendly conversation thread names")
                        .color(TEXT_DIM),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ok_clicked = ui.button("OK").clicked();
                    cancel_clicked = ui.button("Cancel").clicked();
                });
                render_status_message(ui, &self.status);
            });

        if !open || cancel_clicked {
            return DialogOutcome::Cancelled;
        }
        if ok_clicked {
            return self.accept(target);
        }
        DialogOutcome::Open
    }
}
