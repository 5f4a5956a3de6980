//! Debug view window
//!
//! Shows every log line broadcast since the window's owner was created,
//! filtered by named filter words or the quick filter, with a verbosity
//! selector and a clear button.

use std::sync::mpsc::Receiver;

use eframe::egui::{self, RichText, ScrollArea};

use super::theme::{log_line_color, ACCENT_RED, BG_LOG, TEXT_MUTED, TEXT_PRIMARY};
use crate::logs::{LogBroadcaster, LogBuffer, VerbosityControl};
use crate::LogLevel;

/// Something the user did in the debug view this frame
#[derive(Debug, Clone, PartialEq)]
enum DebugAction {
    QuickFilterChanged,
    AddFilterWord,
    SetFilterEnabled(usize, bool),
    RemoveFilter(usize),
    SetLevel(LogLevel),
    Clear,
}

pub struct DebugView {
    pub open: bool,
    buffer: LogBuffer,
    filter_input: String,
    lines: Receiver<String>,
    verbosity: VerbosityControl,
}

impl DebugView {
    /// Subscribe to `broadcaster` and reset verbosity to the first level
    pub fn new(broadcaster: &LogBroadcaster, verbosity: VerbosityControl) -> Self {
        let mut view = Self {
            open: false,
            buffer: LogBuffer::new(),
            filter_input: String::new(),
            lines: broadcaster.subscribe(),
            verbosity,
        };
        view.set_level(LogLevel::ALL[0]);
        view
    }

    /// Move queued lines into the buffer. Runs on the UI thread every frame
    /// so appends never interleave with toggles or renders.
    pub fn drain(&mut self) -> usize {
        let mut received = 0;
        while let Ok(line) = self.lines.try_recv() {
            self.buffer.append(line);
            received += 1;
        }
        received
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn level(&self) -> LogLevel {
        self.verbosity.level()
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.verbosity.set_level(level);
    }

    pub fn set_filter_input(&mut self, text: &str) {
        self.filter_input = text.to_string();
        self.buffer.set_quick_filter_text(text);
    }

    /// Enter in the filter input: turn the current text into a filter entry.
    /// The text stays in the input.
    pub fn submit_filter_input(&mut self) {
        self.buffer.add_filter_word(&self.filter_input);
    }

    pub fn set_filter_enabled(&mut self, index: usize, enabled: bool) {
        self.buffer.set_filter_enabled(index, enabled);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        let mut actions = Vec::new();
        egui::Window::new("Debug View")
            .open(&mut open)
            .default_size([800.0, 800.0])
            .resizable(true)
            .show(ctx, |ui| {
                actions = self.render_contents(ui);
            });
        self.open = open;

        for action in actions {
            self.handle(action);
        }
    }

    fn handle(&mut self, action: DebugAction) {
        match action {
            DebugAction::QuickFilterChanged => {
                self.buffer.set_quick_filter_text(&self.filter_input);
            }
            DebugAction::AddFilterWord => self.submit_filter_input(),
            DebugAction::SetFilterEnabled(index, enabled) => self.set_filter_enabled(index, enabled),
            DebugAction::RemoveFilter(index) => self.buffer.remove_filter(index),
            DebugAction::SetLevel(level) => self.set_level(level),
            DebugAction::Clear => self.clear(),
        }
    }

    fn render_contents(&mut self, ui: &mut egui::Ui) -> Vec<DebugAction> {
        let mut actions = Vec::new();

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.filter_input)
                .hint_text("Add new filter (e.g., 'ERROR') and press Enter")
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            actions.push(DebugAction::QuickFilterChanged);
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.push(DebugAction::AddFilterWord);
            response.request_focus();
        }
        ui.add_space(6.0);

        egui::SidePanel::left("debug_view_filters")
            .resizable(false)
            .exact_width(200.0)
            .show_inside(ui, |ui| {
                ui.label(RichText::new("Filters:").color(TEXT_MUTED));
                ScrollArea::vertical()
                    .id_salt("debug_view_filter_list")
                    .show(ui, |ui| {
                        for (index, entry) in self.buffer.filters().iter().enumerate() {
                            ui.horizontal(|ui| {
                                let mut enabled = entry.enabled;
                                if ui.checkbox(&mut enabled, entry.word.as_str()).changed() {
                                    actions.push(DebugAction::SetFilterEnabled(index, enabled));
                                }
                                if ui
                                    .small_button(RichText::new("✕").color(ACCENT_RED))
                                    .on_hover_text("Remove filter")
                                    .clicked()
                                {
                                    actions.push(DebugAction::RemoveFilter(index));
                                }
                            });
                        }
                    });
            });

        egui::TopBottomPanel::bottom("debug_view_controls").show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Log Level:").color(TEXT_MUTED));
                let mut level = self.verbosity.level();
                egui::ComboBox::from_id_salt("debug_view_level")
                    .selected_text(level.as_str())
                    .show_ui(ui, |ui| {
                        for option in LogLevel::ALL {
                            ui.selectable_value(&mut level, option, option.as_str());
                        }
                    });
                if level != self.verbosity.level() {
                    actions.push(DebugAction::SetLevel(level));
                }
                if ui.button("Clear").clicked() {
                    actions.push(DebugAction::Clear);
                }
                ui.label(
                    RichText::new(format!(
                        "{}/{} lines",
                        self.buffer.render().len(),
                        self.buffer.len()
                    ))
                    .small()
                    .color(TEXT_MUTED),
                );
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_LOG).inner_margin(4.0))
            .show_inside(ui, |ui| {
                ui.label(RichText::new("Log:").color(TEXT_MUTED));
                let lines = self.buffer.render();
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
                ScrollArea::both()
                    .id_salt("debug_view_log")
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show_rows(ui, row_height, lines.len(), |ui, rows| {
                        for line in &lines[rows] {
                            ui.label(
                                RichText::new(line)
                                    .monospace()
                                    .color(log_line_color(line)),
                            );
                        }
                    });
                if lines.is_empty() {
                    ui.label(RichText::new("No log lines").color(TEXT_PRIMARY).weak());
                }
            });

        actions
    }
}
