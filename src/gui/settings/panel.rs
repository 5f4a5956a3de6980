//! Client settings window rendering

use std::sync::Arc;

use eframe::egui::{self, RichText};

use super::helpers::{render_labeled_field, render_section_frame, render_status_message};
use super::save::apply_client_settings;
use super::state::ClientSettingsState;
use crate::client::ModelCatalog;
use crate::config::{CredentialStore, SettingsStore};
use crate::gui::theme::{ACCENT_CYAN, TEXT_MUTED, TEXT_PRIMARY};
use crate::{ClientType, CredentialField};

fn field_hint(field: CredentialField) -> &'static str {
    match field {
        CredentialField::OpenAiKey => "Enter your OpenAI API key",
        CredentialField::AzureKey => "Enter your Azure OpenAI API key",
        CredentialField::AzureEndpoint => "Enter your Azure OpenAI Endpoint",
    }
}

/// Render the client settings window. Sets `dialog` to `None` once it is
/// closed or applied successfully.
pub fn render_client_settings(
    ctx: &egui::Context,
    dialog: &mut Option<ClientSettingsState>,
    store: &mut SettingsStore,
    credentials: &CredentialStore,
    catalog: &Arc<dyn ModelCatalog>,
) {
    let Some(state) = dialog.as_mut() else {
        return;
    };

    if state.poll_models() {
        ctx.request_repaint();
    }

    let mut open = true;
    let mut selected_client = state.client_type;
    let mut refresh_clicked = false;
    let mut apply_clicked = false;

    egui::Window::new("Settings")
        .open(&mut open)
        .default_width(400.0)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(RichText::new("Select AI client for Chat Completion:").color(TEXT_MUTED));
            egui::ComboBox::from_id_salt("settings_client_type")
                .selected_text(selected_client.as_str())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for client in ClientType::ALL {
                        ui.selectable_value(&mut selected_client, client, client.as_str());
                    }
                });
            ui.add_space(8.0);

            render_section_frame(ui, |ui| {
                for field in CredentialField::ALL {
                    let enabled = state.client_type.uses_field(field);
                    render_labeled_field(
                        ui,
                        &format!("{}:", field.label()),
                        state.credential_mut(field),
                        field_hint(field),
                        enabled,
                    );
                }
                let uses_version = state.client_type.uses_api_version();
                render_labeled_field(
                    ui,
                    "Azure OpenAI API Version:",
                    &mut state.api_version,
                    "Enter your Azure OpenAI API Version",
                    uses_version,
                );
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Model for Chat Completion:").color(TEXT_MUTED));
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.model)
                        .font(egui::TextStyle::Monospace)
                        .text_color(TEXT_PRIMARY)
                        .desired_width(260.0),
                );
                egui::ComboBox::from_id_salt("settings_model_list")
                    .selected_text(format!("{} models", state.models.len()))
                    .show_ui(ui, |ui| {
                        for model in &state.models {
                            if ui
                                .selectable_label(state.model == *model, model.as_str())
                                .clicked()
                            {
                                state.model = model.clone();
                            }
                        }
                    });
                if state.is_loading_models() {
                    ui.spinner();
                } else if ui
                    .small_button(RichText::new("⟳").color(ACCENT_CYAN))
                    .on_hover_text("Reload model list")
                    .clicked()
                {
                    refresh_clicked = true;
                }
            });
            ui.add_space(12.0);

            if ui.button(RichText::new("Apply").color(TEXT_PRIMARY)).clicked() {
                apply_clicked = true;
            }
            render_status_message(ui, &state.status);
        });

    if selected_client != state.client_type {
        state.select_client(selected_client, Arc::clone(catalog));
    } else if refresh_clicked {
        state.refresh_models(Arc::clone(catalog));
    }

    if apply_clicked && apply_client_settings(state, store, credentials) {
        open = false;
    }

    if state.is_loading_models() {
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    if !open {
        *dialog = None;
    }
}
