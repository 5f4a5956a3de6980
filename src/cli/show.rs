//! Show command implementation

use anyhow::{Context, Result};
use std::path::Path;

use chatdesk::config::{
    CredentialStore, SettingsStore, DEFAULT_API_VERSION, KEY_API_VERSION, KEY_MODEL,
};
use chatdesk::CredentialField;

/// Print the stored chat completion settings and masked credentials
pub fn show_command(work_dir: &Path) -> Result<()> {
    let path = SettingsStore::default_path(work_dir);
    let store = SettingsStore::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    let credentials = CredentialStore::from_env();

    if store.values().is_empty() {
        println!("No settings stored at {} (using defaults).\n", path.display());
    } else {
        println!("Settings ({}):\n", path.display());
    }

    println!("  ai_client_type: {}", store.client_type());
    println!("  model:          {}", store.get_or_default(KEY_MODEL, ""));
    println!(
        "  api_version:    {}",
        store.get_or_default(KEY_API_VERSION, DEFAULT_API_VERSION)
    );
    println!();

    for field in CredentialField::ALL {
        let value = credentials.display_value(field);
        let shown = if value.is_empty() { "(not set)" } else { value.as_str() };
        println!("  {:<22} {}", field.env_var(), shown);
    }

    Ok(())
}
