//! Settings dialog state
//!
//! Built fresh each time the dialog opens, from the stored settings and the
//! current credentials (secrets masked).

use std::sync::Arc;

use tracing::warn;

use super::models::ModelFetch;
use crate::client::ModelCatalog;
use crate::config::{
    ApplyRequest, CredentialStore, SettingsStore, DEFAULT_API_VERSION, KEY_API_VERSION, KEY_MODEL,
};
use crate::{ClientType, CredentialField};

pub struct ClientSettingsState {
    pub client_type: ClientType,
    pub openai_key: String,
    pub azure_key: String,
    pub azure_endpoint: String,
    pub api_version: String,
    /// Selected or typed model id
    pub model: String,
    /// Models offered for the current client
    pub models: Vec<String>,
    /// Status line: (message, is_error)
    pub status: Option<(String, bool)>,
    fetch: Option<ModelFetch>,
}

impl ClientSettingsState {
    pub fn from_store(store: &SettingsStore, credentials: &CredentialStore) -> Self {
        Self {
            client_type: store.client_type(),
            openai_key: credentials.display_value(CredentialField::OpenAiKey),
            azure_key: credentials.display_value(CredentialField::AzureKey),
            azure_endpoint: credentials.display_value(CredentialField::AzureEndpoint),
            api_version: store
                .get_or_default(KEY_API_VERSION, DEFAULT_API_VERSION)
                .to_string(),
            model: store.get_or_default(KEY_MODEL, "").to_string(),
            models: Vec::new(),
            status: None,
            fetch: None,
        }
    }

    pub fn credential_mut(&mut self, field: CredentialField) -> &mut String {
        match field {
            CredentialField::OpenAiKey => &mut self.openai_key,
            CredentialField::AzureKey => &mut self.azure_key,
            CredentialField::AzureEndpoint => &mut self.azure_endpoint,
        }
    }

    /// API version passed to the model catalog; Azure falls back to the
    /// default when the input is blank
    pub fn fetch_api_version(&self) -> Option<String> {
        if !self.client_type.uses_api_version() {
            return None;
        }
        let version = self.api_version.trim();
        Some(if version.is_empty() {
            DEFAULT_API_VERSION.to_string()
        } else {
            version.to_string()
        })
    }

    /// Switch client and restart model listing
    pub fn select_client(&mut self, client: ClientType, catalog: Arc<dyn ModelCatalog>) {
        self.client_type = client;
        self.refresh_models(catalog);
    }

    pub fn refresh_models(&mut self, catalog: Arc<dyn ModelCatalog>) {
        self.models.clear();
        self.fetch = Some(ModelFetch::start(
            catalog,
            self.client_type,
            self.fetch_api_version(),
        ));
    }

    pub fn is_loading_models(&self) -> bool {
        self.fetch.is_some()
    }

    /// Pick up a finished model listing. Returns true when one arrived.
    pub fn poll_models(&mut self) -> bool {
        let Some(result) = self.fetch.as_ref().and_then(|f| f.poll()) else {
            return false;
        };
        self.fetch = None;

        match result {
            Ok(models) => self.models = models,
            Err(e) => {
                warn!("Failed to fill model selection: {}", e);
                self.models.clear();
                self.status = Some((format!("Failed to fill model selection: {}", e), true));
            }
        }
        true
    }

    pub fn request(&self) -> ApplyRequest {
        ApplyRequest {
            client_type: self.client_type,
            model: self.model.trim().to_string(),
            api_version: self.api_version.trim().to_string(),
            openai_key: self.openai_key.trim().to_string(),
            azure_key: self.azure_key.trim().to_string(),
            azure_endpoint: self.azure_endpoint.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use std::time::{Duration, Instant};

    struct FixedCatalog(Result<Vec<String>, CredentialField>);

    impl ModelCatalog for FixedCatalog {
        fn list_models(
            &self,
            _client: ClientType,
            _api_version: Option<&str>,
        ) -> Result<Vec<String>, ClientError> {
            self.0.clone().map_err(ClientError::MissingCredential)
        }
    }

    fn wait_for_models(state: &mut ClientSettingsState) {
        let start = Instant::now();
        while !state.poll_models() {
            assert!(start.elapsed() < Duration::from_secs(5), "model listing timed out");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_defaults_without_stored_settings() {
        let store = SettingsStore::empty("unused.json");
        let state = ClientSettingsState::from_store(&store, &CredentialStore::new());
        assert_eq!(state.client_type, ClientType::OpenAi);
        assert_eq!(state.api_version, DEFAULT_API_VERSION);
        assert_eq!(state.model, "");
        assert_eq!(state.openai_key, "");
    }

    #[test]
    fn test_secrets_are_masked_on_open() {
        let credentials = CredentialStore::new();
        credentials.set(CredentialField::OpenAiKey, "sk-0123456789");
        let store = SettingsStore::empty("unused.json");

        let state = ClientSettingsState::from_store(&store, &credentials);
        assert_eq!(state.openai_key, "*********6789");
    }

    #[test]
    fn test_fetch_api_version_only_for_azure() {
        let store = SettingsStore::empty("unused.json");
        let mut state = ClientSettingsState::from_store(&store, &CredentialStore::new());
        assert_eq!(state.fetch_api_version(), None);

        state.client_type = ClientType::AzureOpenAi;
        state.api_version = "  ".to_string();
        assert_eq!(state.fetch_api_version().as_deref(), Some(DEFAULT_API_VERSION));
    }

    #[test]
    fn test_select_client_fills_models() {
        let store = SettingsStore::empty("unused.json");
        let mut state = ClientSettingsState::from_store(&store, &CredentialStore::new());
        let catalog = Arc::new(FixedCatalog(Ok(vec!["gpt-4".to_string()])));

        state.select_client(ClientType::OpenAi, catalog);
        assert!(state.is_loading_models());
        wait_for_models(&mut state);

        assert_eq!(state.models, vec!["gpt-4".to_string()]);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_listing_failure_is_a_warning() {
        let store = SettingsStore::empty("unused.json");
        let mut state = ClientSettingsState::from_store(&store, &CredentialStore::new());
        let catalog = Arc::new(FixedCatalog(Err(CredentialField::OpenAiKey)));

        state.refresh_models(catalog);
        wait_for_models(&mut state);

        assert!(state.models.is_empty());
        let (message, is_error) = state.status.clone().unwrap();
        assert!(is_error);
        assert!(message.starts_with("Failed to fill model selection"));
    }
}
