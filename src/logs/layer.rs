//! Tracing layer that feeds the debug view
//!
//! Each event becomes one text line of the form
//! `2024-05-01 12:00:00,123 - chatdesk::gui - INFO - message key=value`
//! and is published to a [`LogBroadcaster`].

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::layer::{Context, Layer};

use super::broadcast::LogBroadcaster;
use super::verbosity::{event_severity, CRITICAL_FIELD};
use crate::LogLevel;

pub struct BroadcastLayer {
    broadcaster: LogBroadcaster,
}

impl BroadcastLayer {
    pub fn new(broadcaster: LogBroadcaster) -> Self {
        Self { broadcaster }
    }
}

impl<S: Subscriber> Layer<S> for BroadcastLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Records bridged from the `log` crate carry their real target here
        let normalized = event.normalized_metadata();
        let meta = normalized.as_ref().unwrap_or_else(|| event.metadata());
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let level = LogLevel::from_severity(event_severity(meta));
        let line = format_line(
            Local::now(),
            meta.target(),
            level,
            &visitor.message,
            &visitor.fields,
        );
        self.broadcaster.publish(&line);
    }
}

/// Render one debug-view line
pub fn format_line(
    timestamp: DateTime<Local>,
    target: &str,
    level: LogLevel,
    message: &str,
    fields: &[(String, String)],
) -> String {
    let mut line = format!(
        "{} - {} - {} - {}",
        timestamp.format("%Y-%m-%d %H:%M:%S,%3f"),
        target,
        level.as_str(),
        message
    );
    for (key, value) in fields {
        let _ = write!(line, " {}={}", key, value);
    }
    line
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}

impl LineVisitor {
    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            CRITICAL_FIELD => {}
            name if name.starts_with("log.") => {}
            name => self.fields.push((name.to_string(), value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logs::VerbosityControl;
    use chrono::TimeZone;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture<F: FnOnce()>(control: &VerbosityControl, f: F) -> Vec<String> {
        let broadcaster = LogBroadcaster::new();
        let rx = broadcaster.subscribe();
        let subscriber = tracing_subscriber::registry()
            .with(BroadcastLayer::new(broadcaster).with_filter(control.clone()));
        tracing::subscriber::with_default(subscriber, f);
        rx.try_iter().collect()
    }

    #[test]
    fn test_format_line_layout() {
        let ts = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let line = format_line(
            ts,
            "chatdesk::gui",
            LogLevel::Warning,
            "model list failed",
            &[("status".to_string(), "401".to_string())],
        );
        assert_eq!(
            line,
            "2024-05-01 12:00:00,000 - chatdesk::gui - WARNING - model list failed status=401"
        );
    }

    #[test]
    fn test_events_are_published_with_fields() {
        let control = VerbosityControl::default();
        let lines = capture(&control, || {
            tracing::info!(target: "chatdesk::test", model = "gpt-4", "applied settings");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" - chatdesk::test - INFO - applied settings model=gpt-4"));
    }

    #[test]
    fn test_level_change_affects_only_later_events() {
        let control = VerbosityControl::default();
        let lines = capture(&control, || {
            tracing::debug!(target: "chatdesk", "before");
            control.set_level(LogLevel::Warning);
            tracing::info!(target: "chatdesk", "hidden");
            tracing::warn!(target: "chatdesk", "shown");
        });
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("DEBUG - before"));
        assert!(lines[1].ends_with("WARNING - shown"));
    }

    #[test]
    fn test_critical_field_promotes_error() {
        let control = VerbosityControl::new(LogLevel::Critical);
        let lines = capture(&control, || {
            tracing::error!(target: "chatdesk", "plain error");
            tracing::error!(target: "chatdesk", critical = true, "fatal");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("CRITICAL - fatal"));
    }

    #[test]
    fn test_bridged_log_records_keep_their_target() {
        let control = VerbosityControl::default();
        let lines = capture(&control, || {
            tracing_log::format_trace(
                &log::Record::builder()
                    .args(format_args!("sending request GET https://api.openai.com/v1/models"))
                    .level(log::Level::Debug)
                    .target("ureq::unit")
                    .module_path(Some("ureq::unit"))
                    .file(Some("src/unit.rs"))
                    .line(Some(7))
                    .build(),
            )
            .unwrap();
        });
        assert_eq!(lines.len(), 1);
        assert!(
            lines[0].ends_with(
                " - ureq::unit - DEBUG - sending request GET https://api.openai.com/v1/models"
            ),
            "unexpected line: {}",
            lines[0]
        );
    }

    #[test]
    fn test_bridged_log_records_follow_level() {
        let control = VerbosityControl::new(LogLevel::Info);
        let lines = capture(&control, || {
            for level in [log::Level::Debug, log::Level::Info] {
                tracing_log::format_trace(
                    &log::Record::builder()
                        .args(format_args!("response status 200"))
                        .level(level)
                        .target("ureq::response")
                        .build(),
                )
                .unwrap();
            }
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" - ureq::response - INFO - response status 200"));
    }

    #[test]
    fn test_foreign_targets_need_warning() {
        let control = VerbosityControl::default();
        let lines = capture(&control, || {
            tracing::info!(target: "winit::window", "noise");
            tracing::warn!(target: "winit::window", "surface lost");
            tracing::debug!(target: "ureq::pool", "connection reused");
        });
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("surface lost"));
        assert!(lines[1].contains("connection reused"));
    }
}
