//! GUI module for chatdesk
//!
//! Native egui window with three dialogs:
//! - **Settings**: AI client type, credentials, API version and model
//! - **General**: thread/run timeouts and friendly thread names
//! - **Debug View**: live, filterable view of the process's log output

pub mod app;
pub mod debug_view;
pub mod general;
pub mod runner;
pub mod settings;
pub mod theme;

pub use app::ChatDeskApp;
pub use debug_view::DebugView;
pub use general::{DialogOutcome, GeneralSettingsDialog};
pub use runner::run_gui;
pub use settings::ClientSettingsState;
