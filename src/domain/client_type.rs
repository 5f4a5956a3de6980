use serde::{Deserialize, Serialize};

/// Which AI backend the chat completion client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    /// api.openai.com
    #[default]
    OpenAi,
    /// An Azure OpenAI resource (needs an endpoint as well as a key)
    AzureOpenAi,
}

impl ClientType {
    /// All client types, in the order they are offered in the UI
    pub const ALL: [ClientType; 2] = [ClientType::OpenAi, ClientType::AzureOpenAi];

    /// Parse the tag stored in the settings file (`OPEN_AI`, `AZURE_OPEN_AI`)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "OPEN_AI" => Some(ClientType::OpenAi),
            "AZURE_OPEN_AI" => Some(ClientType::AzureOpenAi),
            _ => None,
        }
    }

    /// Tag written to the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::OpenAi => "OPEN_AI",
            ClientType::AzureOpenAi => "AZURE_OPEN_AI",
        }
    }

    /// Credential fields that must be non-empty before settings for this
    /// client can be applied
    pub fn required_fields(&self) -> &'static [CredentialField] {
        match self {
            ClientType::OpenAi => &[CredentialField::OpenAiKey],
            ClientType::AzureOpenAi => &[CredentialField::AzureKey, CredentialField::AzureEndpoint],
        }
    }

    /// Whether a credential input is editable while this client is selected
    pub fn uses_field(&self, field: CredentialField) -> bool {
        self.required_fields().contains(&field)
    }

    /// Whether the API version input applies to this client
    pub fn uses_api_version(&self) -> bool {
        matches!(self, ClientType::AzureOpenAi)
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A secret or endpoint that lives in the process environment rather than
/// in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    OpenAiKey,
    AzureKey,
    AzureEndpoint,
}

impl CredentialField {
    pub const ALL: [CredentialField; 3] = [
        CredentialField::OpenAiKey,
        CredentialField::AzureKey,
        CredentialField::AzureEndpoint,
    ];

    /// Environment variable backing this field
    pub fn env_var(&self) -> &'static str {
        match self {
            CredentialField::OpenAiKey => "OPENAI_API_KEY",
            CredentialField::AzureKey => "AZURE_OPENAI_API_KEY",
            CredentialField::AzureEndpoint => "AZURE_OPENAI_ENDPOINT",
        }
    }

    /// Human readable label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            CredentialField::OpenAiKey => "OpenAI API Key",
            CredentialField::AzureKey => "Azure OpenAI API Key",
            CredentialField::AzureEndpoint => "Azure OpenAI Endpoint",
        }
    }

    /// Endpoints are not secret and are displayed verbatim
    pub fn is_secret(&self) -> bool {
        !matches!(self, CredentialField::AzureEndpoint)
    }
}

impl std::fmt::Display for CredentialField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
