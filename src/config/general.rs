//! General settings owned by the main window
//!
//! Timeouts are edited as text and only replace the window's values once
//! both parse.

use super::error::SettingsError;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSettings {
    /// Seconds to wait for a conversation thread operation
    pub thread_timeout: f64,
    /// Seconds to wait for an assistant run
    pub run_timeout: f64,
    /// Ask the chat completion client for friendly thread names
    pub use_chat_completion_for_thread_name: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            thread_timeout: 300.0,
            run_timeout: 600.0,
            use_chat_completion_for_thread_name: true,
        }
    }
}

/// Editable form state for the general settings dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralSettingsForm {
    pub thread_timeout: String,
    pub run_timeout: String,
    pub use_chat_completion_for_thread_name: bool,
}

impl GeneralSettingsForm {
    pub fn from_settings(settings: &GeneralSettings) -> Self {
        Self {
            thread_timeout: settings.thread_timeout.to_string(),
            run_timeout: settings.run_timeout.to_string(),
            use_chat_completion_for_thread_name: settings.use_chat_completion_for_thread_name,
        }
    }

    pub fn validate(&self) -> Result<GeneralSettings, SettingsError> {
        Ok(GeneralSettings {
            thread_timeout: parse_seconds("thread_timeout", &self.thread_timeout)?,
            run_timeout: parse_seconds("run_timeout", &self.run_timeout)?,
            use_chat_completion_for_thread_name: self.use_chat_completion_for_thread_name,
        })
    }

    /// Validate and, on success only, replace `target`
    pub fn commit(&self, target: &mut GeneralSettings) -> Result<(), SettingsError> {
        *target = self.validate()?;
        Ok(())
    }
}

fn parse_seconds(field: &'static str, value: &str) -> Result<f64, SettingsError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| SettingsError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
