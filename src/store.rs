//! In-memory secret store
//!
//! Owns the collection of secrets. Secrets are keyed by name (unique)
//! and kept in insertion order so numbered listings are stable. Folders
//! have no existence of their own: a folder "exists" exactly while some
//! secret carries its name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::secret::Secret;

/// Errors raised by store operations
#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Secret not found: {0}")]
    SecretNotFound(String),

    #[error("Secret name already exists: {0}")]
    DuplicateName(String),

    #[error("Folder does not exist: {0}")]
    NonExistentFolder(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The secret store
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SecretStore {
    secrets: Vec<Secret>,
}

impl SecretStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a secret under its name. Duplicate names are rejected so
    /// point lookups stay unambiguous.
    pub fn add(&mut self, secret: Secret) -> StoreResult<()> {
        if self.contains(secret.name()) {
            return Err(StoreError::DuplicateName(secret.name().to_string()));
        }
        self.secrets.push(secret);
        Ok(())
    }

    /// Exact lookup by name
    pub fn get_by_name(&self, name: &str) -> StoreResult<&Secret> {
        self.secrets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| StoreError::SecretNotFound(name.to_string()))
    }

    /// Every stored secret, in insertion order
    pub fn list_all(&self) -> &[Secret] {
        &self.secrets
    }

    /// Secrets whose folder equals `folder`, in insertion order. A
    /// folder with no secrets does not exist.
    pub fn list_by_folder(&self, folder: &str) -> StoreResult<Vec<&Secret>> {
        let matches: Vec<&Secret> = self
            .secrets
            .iter()
            .filter(|s| s.folder() == folder)
            .collect();

        if matches.is_empty() {
            return Err(StoreError::NonExistentFolder(folder.to_string()));
        }
        Ok(matches)
    }

    /// Delete a secret by name, returning it
    pub fn remove(&mut self, name: &str) -> StoreResult<Secret> {
        let index = self
            .secrets
            .iter()
            .position(|s| s.name() == name)
            .ok_or_else(|| StoreError::SecretNotFound(name.to_string()))?;
        Ok(self.secrets.remove(index))
    }

    /// Check if a name is taken
    pub fn contains(&self, name: &str) -> bool {
        self.secrets.iter().any(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Distinct folder names in first-appearance order
    pub fn folder_names(&self) -> Vec<&str> {
        let mut folders: Vec<&str> = Vec::new();
        for secret in &self.secrets {
            if !folders.contains(&secret.folder()) {
                folders.push(secret.folder());
            }
        }
        folders
    }
}
