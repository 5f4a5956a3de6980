//! Integration tests for chat completion settings persistence
//!
//! These tests verify that:
//! 1. A missing settings file loads as an empty mapping
//! 2. Applied settings survive a reload in a fresh store
//! 3. Failed validation writes neither the file nor credentials

use chatdesk::config::{
    ApplyRequest, CredentialStore, SettingsError, SettingsStore, KEY_API_VERSION,
    KEY_CLIENT_TYPE, KEY_MODEL, SETTINGS_DIR, SETTINGS_FILE,
};
use chatdesk::{ClientType, CredentialField};
use tempfile::TempDir;

fn settings_path(dir: &TempDir) -> std::path::PathBuf {
    SettingsStore::default_path(dir.path())
}

#[test]
fn test_default_path_layout() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = settings_path(&dir);
    assert!(path.ends_with(format!("{}/{}", SETTINGS_DIR, SETTINGS_FILE)));
}

#[test]
fn test_missing_file_yields_empty_mapping() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::load(settings_path(&dir)).expect("Missing file should load");

    assert!(store.values().is_empty());
    assert_eq!(store.get_or_default(KEY_MODEL, ""), "");
}

#[test]
fn test_apply_then_reload_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let credentials = CredentialStore::new();

    let mut store = SettingsStore::load(settings_path(&dir)).unwrap();
    let request = ApplyRequest {
        client_type: ClientType::OpenAi,
        model: "gpt-4".to_string(),
        api_version: String::new(),
        openai_key: "sk-roundtrip-key".to_string(),
        ..Default::default()
    };
    store.apply(&request, &credentials).expect("Apply should succeed");

    let reloaded = SettingsStore::load(settings_path(&dir)).expect("Reload should succeed");
    assert_eq!(reloaded.get_or_default(KEY_CLIENT_TYPE, ""), "OPEN_AI");
    assert_eq!(reloaded.get_or_default(KEY_MODEL, ""), "gpt-4");
    assert_eq!(reloaded.get_or_default(KEY_API_VERSION, "unset"), "");
    assert_eq!(reloaded.values().len(), 3);
    assert_eq!(reloaded.client_type(), ClientType::OpenAi);
}

#[test]
fn test_apply_overwrites_whole_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = settings_path(&dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"model":"old","legacy_key":"x"}"#).unwrap();

    let mut store = SettingsStore::load(&path).unwrap();
    assert_eq!(store.get_or_default("legacy_key", ""), "x");

    let request = ApplyRequest {
        client_type: ClientType::AzureOpenAi,
        model: "my-deployment".to_string(),
        api_version: "2024-02-01".to_string(),
        azure_key: "azure-secret-key".to_string(),
        azure_endpoint: "https://example.openai.azure.com/".to_string(),
        ..Default::default()
    };
    store.apply(&request, &CredentialStore::new()).unwrap();

    let reloaded = SettingsStore::load(&path).unwrap();
    assert_eq!(reloaded.get_or_default("legacy_key", "gone"), "gone");
    assert_eq!(reloaded.client_type(), ClientType::AzureOpenAi);
    assert_eq!(reloaded.get_or_default(KEY_API_VERSION, ""), "2024-02-01");
}

#[test]
fn test_azure_missing_key_touches_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = settings_path(&dir);
    let credentials = CredentialStore::new();
    credentials.set(CredentialField::AzureEndpoint, "https://before.example/");

    let mut store = SettingsStore::load(&path).unwrap();
    let request = ApplyRequest {
        client_type: ClientType::AzureOpenAi,
        model: "deployment".to_string(),
        azure_endpoint: "https://after.example/".to_string(),
        ..Default::default()
    };

    let err = store.apply(&request, &credentials).unwrap_err();
    assert!(matches!(err, SettingsError::MissingCredentials { .. }));
    assert!(!path.exists(), "Settings file must not be written");
    assert_eq!(
        credentials.get(CredentialField::AzureEndpoint).as_deref(),
        Some("https://before.example/")
    );
    assert!(store.values().is_empty());
}

#[test]
fn test_unchanged_masked_keys_are_not_rewritten() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let credentials = CredentialStore::new();
    credentials.set(CredentialField::OpenAiKey, "sk-keep-this-secret");
    credentials.set(CredentialField::AzureKey, "azure-keep-this-too");

    let mut store = SettingsStore::load(settings_path(&dir)).unwrap();
    let request = ApplyRequest {
        client_type: ClientType::OpenAi,
        model: "gpt-4".to_string(),
        openai_key: credentials.display_value(CredentialField::OpenAiKey),
        azure_key: credentials.display_value(CredentialField::AzureKey),
        ..Default::default()
    };
    store.apply(&request, &credentials).unwrap();

    assert_eq!(
        credentials.get(CredentialField::OpenAiKey).as_deref(),
        Some("sk-keep-this-secret")
    );
    assert_eq!(
        credentials.get(CredentialField::AzureKey).as_deref(),
        Some("azure-keep-this-too")
    );
}

#[test]
fn test_unchanged_short_key_is_not_rewritten() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let credentials = CredentialStore::new();
    credentials.set(CredentialField::OpenAiKey, "abcdefgh");

    let mut store = SettingsStore::load(settings_path(&dir)).unwrap();
    let request = ApplyRequest {
        client_type: ClientType::OpenAi,
        model: "gpt-4".to_string(),
        openai_key: credentials.display_value(CredentialField::OpenAiKey),
        ..Default::default()
    };
    assert_eq!(request.openai_key, "****efgh");
    store.apply(&request, &credentials).unwrap();

    assert_eq!(
        credentials.get(CredentialField::OpenAiKey).as_deref(),
        Some("abcdefgh")
    );
}
