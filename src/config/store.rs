//! Chat completion settings persisted as a small JSON object
//!
//! The file holds exactly `ai_client_type`, `model` and `api_version`.
//! Credentials are validated here but stored in [`CredentialStore`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::credentials::CredentialStore;
use super::error::SettingsError;
use super::io::{read_optional, write_atomic};
use crate::{ClientType, CredentialField};

pub const SETTINGS_DIR: &str = "config";
pub const SETTINGS_FILE: &str = "chat_completion_settings.json";

pub const KEY_CLIENT_TYPE: &str = "ai_client_type";
pub const KEY_MODEL: &str = "model";
pub const KEY_API_VERSION: &str = "api_version";

/// API version pre-filled for Azure when nothing is stored
pub const DEFAULT_API_VERSION: &str = "2023-09-01-preview";

/// On-disk layout, in the key order the file is written
#[derive(Serialize)]
struct SettingsFile<'a> {
    ai_client_type: &'a str,
    model: &'a str,
    api_version: &'a str,
}

/// Everything the settings dialog submits on Apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyRequest {
    pub client_type: ClientType,
    pub model: String,
    pub api_version: String,
    pub openai_key: String,
    pub azure_key: String,
    pub azure_endpoint: String,
}

impl ApplyRequest {
    pub fn credential(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::OpenAiKey => &self.openai_key,
            CredentialField::AzureKey => &self.azure_key,
            CredentialField::AzureEndpoint => &self.azure_endpoint,
        }
    }

    /// Check that every credential the selected client needs is non-empty
    pub fn validate(&self) -> Result<(), SettingsError> {
        let missing: Vec<CredentialField> = self
            .client_type
            .required_fields()
            .iter()
            .copied()
            .filter(|field| self.credential(*field).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SettingsError::MissingCredentials {
                client: self.client_type,
                fields: missing,
            })
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// `<work_dir>/config/chat_completion_settings.json`
    pub fn default_path(work_dir: &Path) -> PathBuf {
        work_dir.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    /// Store with no values, bound to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    /// Load settings from `path`. A missing file yields an empty mapping.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let mut store = Self::empty(path);
        if let Some(content) = read_optional(&store.path)? {
            store.values =
                serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                    path: store.path.clone(),
                    source,
                })?;
            debug!("Loaded {} settings from {}", store.values.len(), store.path.display());
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Stored client type, falling back to OpenAI for missing or unknown tags
    pub fn client_type(&self) -> ClientType {
        ClientType::from_str(self.get_or_default(KEY_CLIENT_TYPE, "")).unwrap_or_default()
    }

    /// Validate and persist a dialog submission.
    ///
    /// On validation failure nothing is written. On success the settings
    /// file is replaced, non-masked credentials are stored, and the
    /// in-memory mapping mirrors the file.
    pub fn apply(
        &mut self,
        request: &ApplyRequest,
        credentials: &CredentialStore,
    ) -> Result<(), SettingsError> {
        request.validate()?;

        let file = SettingsFile {
            ai_client_type: request.client_type.as_str(),
            model: &request.model,
            api_version: &request.api_version,
        };
        let json = serde_json::to_string_pretty(&file)?;
        write_atomic(&self.path, &json)?;

        for field in CredentialField::ALL {
            if credentials.save_submitted(field, request.credential(field)) {
                debug!("Updated {}", field.env_var());
            }
        }

        self.values = BTreeMap::from([
            (KEY_CLIENT_TYPE.to_string(), file.ai_client_type.to_string()),
            (KEY_MODEL.to_string(), request.model.clone()),
            (KEY_API_VERSION.to_string(), request.api_version.clone()),
        ]);

        info!(
            client = request.client_type.as_str(),
            model = %request.model,
            "Applied chat completion settings"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn openai_request(key: &str) -> ApplyRequest {
        ApplyRequest {
            client_type: ClientType::OpenAi,
            model: "gpt-4".to_string(),
            openai_key: key.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::load(SettingsStore::default_path(dir.path())).unwrap();
        assert!(store.values().is_empty());
        assert_eq!(store.get_or_default(KEY_MODEL, ""), "");
        assert_eq!(store.client_type(), ClientType::OpenAi);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SettingsStore::load(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_azure_without_key_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = SettingsStore::default_path(dir.path());
        let mut store = SettingsStore::load(&path).unwrap();
        let credentials = CredentialStore::new();

        let request = ApplyRequest {
            client_type: ClientType::AzureOpenAi,
            azure_endpoint: "https://example.openai.azure.com/".to_string(),
            ..Default::default()
        };
        let err = store.apply(&request, &credentials).unwrap_err();

        match err {
            SettingsError::MissingCredentials { fields, .. } => {
                assert_eq!(fields, vec![CredentialField::AzureKey]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
        assert_eq!(credentials.get(CredentialField::AzureEndpoint), None);
    }

    #[test]
    fn test_apply_writes_three_keys_in_order() {
        let dir = tempdir().unwrap();
        let path = SettingsStore::default_path(dir.path());
        let mut store = SettingsStore::load(&path).unwrap();

        store
            .apply(&openai_request("sk-test-1234"), &CredentialStore::new())
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let client_pos = content.find("ai_client_type").unwrap();
        let model_pos = content.find("\"model\"").unwrap();
        let version_pos = content.find("api_version").unwrap();
        assert!(client_pos < model_pos && model_pos < version_pos);
        assert_eq!(store.get_or_default(KEY_MODEL, ""), "gpt-4");
    }

    #[test]
    fn test_apply_skips_masked_key() {
        let dir = tempdir().unwrap();
        let mut store = SettingsStore::empty(dir.path().join("s.json"));
        let credentials = CredentialStore::new();
        credentials.set(CredentialField::OpenAiKey, "sk-real-secret-9999");

        let masked = credentials.display_value(CredentialField::OpenAiKey);
        store.apply(&openai_request(&masked), &credentials).unwrap();

        assert_eq!(
            credentials.get(CredentialField::OpenAiKey).as_deref(),
            Some("sk-real-secret-9999")
        );
    }

    #[test]
    fn test_whitespace_key_fails_validation() {
        let request = openai_request("   ");
        assert!(request.validate().is_err());
    }
}
