//! Process-wide credential state
//!
//! API keys and the Azure endpoint never go into the settings file. They are
//! seeded from the environment at startup and held in a shared
//! [`CredentialStore`] that outlives any dialog. Clones share the same state.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::CredentialField;

/// Prefix that marks a value as the masked display form of a stored secret
pub const MASK_SENTINEL: &str = "*******";

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    values: Arc<RwLock<HashMap<CredentialField, String>>>,
}

impl CredentialStore {
    /// Empty store, nothing read from the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from `OPENAI_API_KEY`, `AZURE_OPENAI_API_KEY` and
    /// `AZURE_OPENAI_ENDPOINT`
    pub fn from_env() -> Self {
        let store = Self::new();
        for field in CredentialField::ALL {
            if let Ok(value) = std::env::var(field.env_var()) {
                store.set(field, &value);
            }
        }
        store
    }

    pub fn get(&self, field: CredentialField) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(&field).cloned())
            .filter(|v| !v.is_empty())
    }

    pub fn set(&self, field: CredentialField, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(field, value.to_string());
        }
    }

    /// Store a value submitted from the settings dialog. Empty input, text
    /// still in masked form and text equal to what the dialog showed are
    /// skipped. Returns whether it was stored.
    ///
    /// Short secrets mask to fewer asterisks than [`MASK_SENTINEL`], so the
    /// comparison with the displayed value is what keeps them intact.
    pub fn save_submitted(&self, field: CredentialField, value: &str) -> bool {
        if value.is_empty() || is_masked(value) || value == self.display_value(field) {
            return false;
        }
        self.set(field, value);
        true
    }

    /// Value as shown in the settings dialog: secrets masked, endpoints raw
    pub fn display_value(&self, field: CredentialField) -> String {
        match self.get(field) {
            Some(value) if field.is_secret() => mask_secret(&value),
            Some(value) => value,
            None => String::new(),
        }
    }
}

/// Replace all but the last four characters with `*`. Values of four
/// characters or fewer are returned unchanged.
pub fn mask_secret(value: &str) -> String {
    let count = value.chars().count();
    if count <= 4 {
        return value.to_string();
    }
    let tail: String = value.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

/// Whether dialog text is the masked form of an existing secret.
///
/// This is a literal prefix check, so a genuine key starting with seven
/// asterisks is also treated as masked.
pub fn is_masked(value: &str) -> bool {
    value.starts_with(MASK_SENTINEL)
}
