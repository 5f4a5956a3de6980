//! Models command implementation

use anyhow::{Context, Result};
use std::path::Path;

use chatdesk::client::{ModelCatalog, OpenAiCatalog};
use chatdesk::config::{CredentialStore, SettingsStore, DEFAULT_API_VERSION, KEY_API_VERSION};
use chatdesk::ClientType;

/// List model ids for a client type (defaults to the stored one)
pub fn models_command(work_dir: &Path, client: Option<String>) -> Result<()> {
    let store = SettingsStore::load(SettingsStore::default_path(work_dir))?;

    let client = match client {
        Some(tag) => match ClientType::from_str(&tag) {
            Some(client) => client,
            None => {
                eprintln!("Unknown client type: {} (expected OPEN_AI or AZURE_OPEN_AI)", tag);
                return Ok(());
            }
        },
        None => store.client_type(),
    };

    let api_version = client
        .uses_api_version()
        .then(|| store.get_or_default(KEY_API_VERSION, DEFAULT_API_VERSION));

    let catalog = OpenAiCatalog::new(CredentialStore::from_env());
    let models = catalog
        .list_models(client, api_version)
        .with_context(|| format!("Failed to list models for {}", client))?;

    if models.is_empty() {
        println!("No models listed for {}.", client);
        return Ok(());
    }

    println!("Models for {} ({}):\n", client, models.len());
    for model in models {
        println!("  {}", model);
    }

    Ok(())
}
