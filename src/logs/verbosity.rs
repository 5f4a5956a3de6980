//! Process-wide minimum severity
//!
//! A `VerbosityControl` is cloned into the broadcast layer's filter, into the
//! stderr layer's [`LevelGate`] and into the GUI. Setting a level takes effect
//! on the next emitted event; lines already delivered are not touched.
//!
//! Records from the `log` crate (ureq logs that way) arrive through the
//! tracing-log bridge, whose callsites all carry the target `log`. The real
//! target is recovered from the event in `event_enabled`.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata};
use tracing_log::NormalizeEvent;
use tracing_subscriber::layer::{Context, Filter};

use crate::LogLevel;

/// Tracing target of this crate
pub(crate) const APP_TARGET: &str = "chatdesk";

/// Target used by the HTTP client behind model listing
pub(crate) const HTTP_CLIENT_TARGET: &str = "ureq";

/// Field that promotes an `ERROR` event to CRITICAL, e.g.
/// `tracing::error!(critical = true, "...")`
pub const CRITICAL_FIELD: &str = "critical";

#[derive(Debug, Clone)]
pub struct VerbosityControl {
    min: Arc<AtomicU8>,
}

impl Default for VerbosityControl {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl VerbosityControl {
    pub fn new(level: LogLevel) -> Self {
        Self {
            min: Arc::new(AtomicU8::new(level.severity())),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.min.store(level.severity(), Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_severity(self.min.load(Ordering::Relaxed))
    }

    /// Whether an event with this metadata reaches the broadcaster.
    ///
    /// The app's own target and the HTTP client's target follow the selected
    /// level. Other crates are held at WARNING or above.
    pub fn allows(&self, meta: &Metadata<'_>) -> bool {
        let severity = event_severity(meta);
        let min = self.min.load(Ordering::Relaxed);
        if is_controlled_target(meta.target()) {
            severity >= min
        } else {
            severity >= min.max(LogLevel::Warning.severity())
        }
    }

    /// Whether an event with this metadata may be emitted at all. Only the
    /// app's target and the HTTP client's target are held to the selected
    /// level; everything else is left to the other filters.
    pub fn emits(&self, meta: &Metadata<'_>) -> bool {
        !is_controlled_target(meta.target())
            || event_severity(meta) >= self.min.load(Ordering::Relaxed)
    }

    /// Filter for output layers other than the debug view
    pub fn gate(&self) -> LevelGate {
        LevelGate {
            control: self.clone(),
        }
    }
}

impl<S> Filter<S> for VerbosityControl {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.allows(meta)
    }

    fn event_enabled(&self, event: &Event<'_>, _cx: &Context<'_, S>) -> bool {
        match event.normalized_metadata() {
            Some(meta) => self.allows(&meta),
            None => true,
        }
    }

    // The level can change at runtime, so callsites must never be cached.
    fn callsite_enabled(&self, _meta: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }
}

/// Applies the selected level to the app's and HTTP client's targets
/// without restricting other crates.
#[derive(Debug, Clone)]
pub struct LevelGate {
    control: VerbosityControl,
}

impl<S> Filter<S> for LevelGate {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.control.emits(meta)
    }

    fn event_enabled(&self, event: &Event<'_>, _cx: &Context<'_, S>) -> bool {
        match event.normalized_metadata() {
            Some(meta) => self.control.emits(&meta),
            None => true,
        }
    }

    fn callsite_enabled(&self, _meta: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }
}

/// Map a tracing level onto the 10..50 severity scale
pub(crate) fn level_severity(level: &Level) -> u8 {
    match *level {
        Level::TRACE => 5,
        Level::DEBUG => LogLevel::Debug.severity(),
        Level::INFO => LogLevel::Info.severity(),
        Level::WARN => LogLevel::Warning.severity(),
        Level::ERROR => LogLevel::Error.severity(),
    }
}

pub(crate) fn event_severity(meta: &Metadata<'_>) -> u8 {
    if *meta.level() == Level::ERROR && meta.fields().field(CRITICAL_FIELD).is_some() {
        LogLevel::Critical.severity()
    } else {
        level_severity(meta.level())
    }
}

pub(crate) fn is_controlled_target(target: &str) -> bool {
    [APP_TARGET, HTTP_CLIENT_TARGET].iter().any(|root| {
        target == *root
            || target
                .strip_prefix(root)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}
