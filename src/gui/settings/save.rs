//! Settings apply functionality
//!
//! Validates the dialog input and persists it through the settings store.

use tracing::warn;

use super::state::ClientSettingsState;
use crate::config::{CredentialStore, SettingsStore};

/// Apply the dialog's values. Returns true when the dialog can close.
///
/// Validation or write failures are shown in the dialog's status line and
/// leave the dialog open.
pub fn apply_client_settings(
    state: &mut ClientSettingsState,
    store: &mut SettingsStore,
    credentials: &CredentialStore,
) -> bool {
    match store.apply(&state.request(), credentials) {
        Ok(()) => {
            state.status = Some(("Settings saved!".to_string(), false));
            true
        }
        Err(e) => {
            warn!("Settings not applied: {}", e);
            state.status = Some((e.to_string(), true));
            false
        }
    }
}
