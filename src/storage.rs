//! Plain JSON persistence for the secret store
//!
//! The store is written whole to a single pretty-printed JSON file under
//! the user data directory. Single-user and sequential, so a plain
//! read-modify-write cycle is enough. No encryption at rest.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::SecretStore;

/// File name of the store inside the data directory
const STORE_FILE: &str = "secrets.json";

/// Default location: <data_dir>/securenus/secrets.json
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("securenus")
        .join(STORE_FILE)
}

/// Load the store from disk. A missing file is an empty store.
pub fn load(path: &Path) -> Result<SecretStore> {
    if !path.exists() {
        return Ok(SecretStore::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read store: {}", path.display()))?;

    serde_json::from_str(&content).context("Failed to parse store JSON")
}

/// Write the store to disk, creating parent directories as needed
pub fn save(path: &Path, store: &SecretStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(store).context("Failed to serialize store")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write store: {}", path.display()))
}
