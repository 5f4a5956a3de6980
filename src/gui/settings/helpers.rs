//! UI helper functions for dialog rendering

use eframe::egui::{self, RichText};

use crate::gui::theme::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY};

/// Label above a single-line input; disabled inputs are greyed out
pub fn render_labeled_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    enabled: bool,
) {
    ui.label(RichText::new(label).color(TEXT_MUTED));
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value)
            .font(egui::TextStyle::Monospace)
            .text_color(TEXT_PRIMARY)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}

/// Render a status message (success or error)
pub fn render_status_message(ui: &mut egui::Ui, status: &Option<(String, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.label(RichText::new(msg).color(color));
    }
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}
