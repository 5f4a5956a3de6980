use std::path::PathBuf;

use crate::{ClientType, CredentialField};

/// Error type for settings loading, validation and persistence
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write settings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{} required when applying {client} settings.", describe_missing(.fields))]
    MissingCredentials {
        client: ClientType,
        fields: Vec<CredentialField>,
    },

    #[error("Please enter valid numbers for the timeouts.")]
    InvalidNumber { field: &'static str, value: String },
}

/// "X is" / "X and Y are"
fn describe_missing(fields: &[CredentialField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
    match labels.as_slice() {
        [] => "Nothing is".to_string(),
        [one] => format!("{} is", one),
        [rest @ .., last] => format!("{} and {} are", rest.join(", "), last),
    }
}
