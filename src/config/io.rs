//! Settings file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use super::error::SettingsError;

/// Replace `path` with `content` using an atomic write under a file lock.
///
/// 1. Exclusive lock on a sibling `.lock` file serializes concurrent writers
/// 2. Content goes to a temp file which is synced, then renamed over `path`
/// 3. Parent directory is created if needed
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<(), SettingsError> {
    let write_err = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let lock_path = sibling(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(write_err)?;

    // Blocks until available; released when lock_file is dropped
    lock_file.lock_exclusive().map_err(write_err)?;

    let temp_path = sibling(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(write_err)?;

    temp_file.write_all(content.as_bytes()).map_err(write_err)?;
    temp_file.sync_all().map_err(write_err)?;

    std::fs::rename(&temp_path, path).map_err(write_err)?;

    Ok(())
}

/// Read a file, treating "not found" as `None`
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SettingsError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// `settings.json` -> `settings.json.<suffix>`
fn sibling(path: &Path, suffix: &str) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
