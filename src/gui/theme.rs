//! GUI Theme: "Terminal Phosphor"
//!
//! Color constants shared by the main window and the dialogs.

use eframe::egui::{self, Color32};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Deep charcoal with a subtle blue tint
pub const BG_PRIMARY: Color32 = Color32::from_rgb(18, 20, 24);
/// Secondary background for panels and sections
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 28, 34);
/// Log view background
pub const BG_LOG: Color32 = Color32::from_rgb(12, 14, 17);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Warm amber phosphor glow
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 176, 0);
pub const TEXT_DIM: Color32 = Color32::from_rgb(180, 130, 50);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 85, 60);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 255, 200);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 255, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(255, 80, 80);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(255, 200, 50);

/// Color for a debug-view line, picked from its severity token
pub fn log_line_color(line: &str) -> Color32 {
    if line.contains(" - CRITICAL - ") || line.contains(" - ERROR - ") {
        ACCENT_RED
    } else if line.contains(" - WARNING - ") {
        ACCENT_YELLOW
    } else if line.contains(" - DEBUG - ") {
        TEXT_MUTED
    } else {
        TEXT_PRIMARY
    }
}

/// Apply the dark visuals once at startup
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_SECONDARY;
    visuals.extreme_bg_color = BG_LOG;
    visuals.override_text_color = Some(TEXT_DIM);
    visuals.selection.bg_fill = Color32::from_rgb(40, 50, 65);
    ctx.set_visuals(visuals);
}
