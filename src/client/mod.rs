//! AI client collaborator used to populate the model selector
//!
//! The settings dialog only needs one thing from a client: the list of
//! model ids it can use. [`ModelCatalog`] is that seam; [`OpenAiCatalog`]
//! talks to the OpenAI REST API.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::config::CredentialStore;
use crate::{ClientType, CredentialField};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Error type for model listing
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0} is not set")]
    MissingCredential(CredentialField),

    #[error("Request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("Failed to read model list: {0}")]
    Decode(#[from] std::io::Error),
}

/// Something that can list available model ids for a client type
pub trait ModelCatalog: Send + Sync {
    fn list_models(
        &self,
        client: ClientType,
        api_version: Option<&str>,
    ) -> Result<Vec<String>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

/// Lists models from api.openai.com. Azure deployments are named by the
/// user, so Azure yields an empty list.
#[derive(Clone)]
pub struct OpenAiCatalog {
    base_url: String,
    credentials: CredentialStore,
    agent: ureq::Agent,
}

impl OpenAiCatalog {
    pub fn new(credentials: CredentialStore) -> Self {
        Self::with_url(OPENAI_BASE_URL, credentials)
    }

    pub fn with_url(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self {
            base_url: base_url.into(),
            credentials,
            agent,
        }
    }

    fn list_openai_models(&self) -> Result<Vec<String>, ClientError> {
        let key = self
            .credentials
            .get(CredentialField::OpenAiKey)
            .ok_or(ClientError::MissingCredential(CredentialField::OpenAiKey))?;

        let url = format!("{}/models", self.base_url.trim_end_matches('/'));
        let list: ModelList = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", key))
            .call()
            .map_err(Box::new)?
            .into_json()?;

        let models = model_ids(list);
        debug!("Listed {} models from {}", models.len(), url);
        Ok(models)
    }
}

impl ModelCatalog for OpenAiCatalog {
    fn list_models(
        &self,
        client: ClientType,
        _api_version: Option<&str>,
    ) -> Result<Vec<String>, ClientError> {
        match client {
            ClientType::OpenAi => self.list_openai_models(),
            ClientType::AzureOpenAi => Ok(Vec::new()),
        }
    }
}

/// Ids in the order the API returned them
fn model_ids(list: ModelList) -> Vec<String> {
    list.data.into_iter().map(|m| m.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_list() {
        let body = r#"{"object":"list","data":[
            {"id":"gpt-4","object":"model","owned_by":"openai"},
            {"id":"gpt-3.5-turbo","object":"model","owned_by":"openai"}
        ]}"#;
        let list: ModelList = serde_json::from_str(body).unwrap();
        assert_eq!(model_ids(list), vec!["gpt-4", "gpt-3.5-turbo"]);
    }

    #[test]
    fn test_azure_lists_nothing() {
        let catalog = OpenAiCatalog::new(CredentialStore::new());
        let models = catalog
            .list_models(ClientType::AzureOpenAi, Some("2023-09-01-preview"))
            .unwrap();
        assert!(models.is_empty());
    }

    #[test]
    fn test_openai_without_key_fails_before_request() {
        let catalog = OpenAiCatalog::with_url("http://127.0.0.1:9", CredentialStore::new());
        let err = catalog.list_models(ClientType::OpenAi, None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingCredential(CredentialField::OpenAiKey)
        ));
        assert_eq!(err.to_string(), "OpenAI API Key is not set");
    }
}
