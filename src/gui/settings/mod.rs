//! Client settings dialog
//!
//! Lets the user pick the AI client type, enter credentials (shown masked),
//! choose a model and apply everything through the settings store.

mod helpers;
mod models;
mod panel;
mod save;
mod state;

pub(crate) use helpers::{render_labeled_field, render_status_message};
pub use panel::render_client_settings;
pub use save::apply_client_settings;
pub use state::ClientSettingsState;
