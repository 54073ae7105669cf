//! Typed secret records
//!
//! Each secret is one fixed variant with a name, a folder, and
//! type-specific fields. The variant is chosen at construction and never
//! changes; construction validates fields so invalid data never reaches
//! the store.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Folder assigned when the caller does not name one.
pub const DEFAULT_FOLDER: &str = "unnamed";

/// Errors raised while constructing a secret
#[derive(Error, Debug, PartialEq)]
pub enum SecretError {
    #[error("Secret name cannot be empty")]
    EmptyName,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type SecretResult<T> = Result<T, SecretError>;

/// A stored secret, one variant per supported kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Secret {
    /// Website or service login
    BasicPassword {
        name: String,
        folder: String,
        username: String,
        password: String,
        url: String,
    },
    /// Payment card details
    CreditCard {
        name: String,
        folder: String,
        full_name: String,
        card_number: String,
        cvc: String,
        expiry_date: String,
    },
    /// Cryptocurrency wallet credentials
    CryptoWallet {
        name: String,
        folder: String,
        username: String,
        private_key: String,
        seed_phrase: String,
    },
    /// NUSNet institutional network account
    NusNet {
        name: String,
        folder: String,
        nusnet_id: String,
        password: String,
    },
    /// Student matriculation number (nothing to mask)
    StudentId {
        name: String,
        folder: String,
        student_id: String,
    },
    /// Wifi network credentials
    WifiPassword {
        name: String,
        folder: String,
        username: String,
        password: String,
    },
}

impl Secret {
    pub fn basic_password(
        name: &str,
        folder: Option<&str>,
        username: &str,
        password: &str,
        url: &str,
    ) -> SecretResult<Self> {
        validate_name(name)?;
        validate_url(url)?;
        Ok(Secret::BasicPassword {
            name: name.to_string(),
            folder: resolve_folder(folder),
            username: username.to_string(),
            password: password.to_string(),
            url: url.to_string(),
        })
    }

    pub fn credit_card(
        name: &str,
        folder: Option<&str>,
        full_name: &str,
        card_number: &str,
        cvc: &str,
        expiry_date: &str,
    ) -> SecretResult<Self> {
        validate_name(name)?;
        Ok(Secret::CreditCard {
            name: name.to_string(),
            folder: resolve_folder(folder),
            full_name: full_name.to_string(),
            card_number: card_number.to_string(),
            cvc: cvc.to_string(),
            expiry_date: expiry_date.to_string(),
        })
    }

    pub fn crypto_wallet(
        name: &str,
        folder: Option<&str>,
        username: &str,
        private_key: &str,
        seed_phrase: &str,
    ) -> SecretResult<Self> {
        validate_name(name)?;
        Ok(Secret::CryptoWallet {
            name: name.to_string(),
            folder: resolve_folder(folder),
            username: username.to_string(),
            private_key: private_key.to_string(),
            seed_phrase: seed_phrase.to_string(),
        })
    }

    pub fn nusnet(
        name: &str,
        folder: Option<&str>,
        nusnet_id: &str,
        password: &str,
    ) -> SecretResult<Self> {
        validate_name(name)?;
        Ok(Secret::NusNet {
            name: name.to_string(),
            folder: resolve_folder(folder),
            nusnet_id: nusnet_id.to_string(),
            password: password.to_string(),
        })
    }

    pub fn student_id(
        name: &str,
        folder: Option<&str>,
        student_id: &str,
    ) -> SecretResult<Self> {
        validate_name(name)?;
        Ok(Secret::StudentId {
            name: name.to_string(),
            folder: resolve_folder(folder),
            student_id: student_id.to_string(),
        })
    }

    pub fn wifi_password(
        name: &str,
        folder: Option<&str>,
        username: &str,
        password: &str,
    ) -> SecretResult<Self> {
        validate_name(name)?;
        Ok(Secret::WifiPassword {
            name: name.to_string(),
            folder: resolve_folder(folder),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// The lookup key, unique within a store
    pub fn name(&self) -> &str {
        match self {
            Secret::BasicPassword { name, .. }
            | Secret::CreditCard { name, .. }
            | Secret::CryptoWallet { name, .. }
            | Secret::NusNet { name, .. }
            | Secret::StudentId { name, .. }
            | Secret::WifiPassword { name, .. } => name,
        }
    }

    /// The folder this secret belongs to (never empty)
    pub fn folder(&self) -> &str {
        match self {
            Secret::BasicPassword { folder, .. }
            | Secret::CreditCard { folder, .. }
            | Secret::CryptoWallet { folder, .. }
            | Secret::NusNet { folder, .. }
            | Secret::StudentId { folder, .. }
            | Secret::WifiPassword { folder, .. } => folder,
        }
    }
}

fn validate_name(name: &str) -> SecretResult<()> {
    if name.trim().is_empty() {
        return Err(SecretError::EmptyName);
    }
    Ok(())
}

/// Absent or empty folder names fall back to the sentinel folder
fn resolve_folder(folder: Option<&str>) -> String {
    match folder {
        Some(f) if !f.trim().is_empty() => f.to_string(),
        _ => DEFAULT_FOLDER.to_string(),
    }
}

/// Accept absolute URLs, and bare hosts like "google.com" by retrying
/// with an https prefix.
fn validate_url(url: &str) -> SecretResult<()> {
    if url.trim().is_empty() {
        return Err(SecretError::InvalidUrl(url.to_string()));
    }
    if Url::parse(url).is_ok() {
        return Ok(());
    }
    Url::parse(&format!("https://{}", url))
        .map(|_| ())
        .map_err(|_| SecretError::InvalidUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_password_fields() {
        let secret = Secret::basic_password(
            "basicPassword1",
            Some("FolderName"),
            "basicUsername",
            "Lorem Ipsum 112",
            "google.com",
        )
        .unwrap();

        assert_eq!(secret.name(), "basicPassword1");
        assert_eq!(secret.folder(), "FolderName");
    }

    #[test]
    fn test_default_folder() {
        let secret = Secret::student_id("sid", None, "A021313G").unwrap();
        assert_eq!(secret.folder(), DEFAULT_FOLDER);

        let secret = Secret::student_id("sid", Some(""), "A021313G").unwrap();
        assert_eq!(secret.folder(), DEFAULT_FOLDER);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Secret::wifi_password("", None, "user", "pass");
        assert_eq!(result.unwrap_err(), SecretError::EmptyName);

        let result = Secret::nusnet("   ", None, "e081888", "pass");
        assert_eq!(result.unwrap_err(), SecretError::EmptyName);
    }

    #[test]
    fn test_url_validation() {
        // Bare hosts and full URLs both pass
        assert!(Secret::basic_password("a", None, "u", "p", "google.com").is_ok());
        assert!(Secret::basic_password("b", None, "u", "p", "https://nus.edu.sg/login").is_ok());

        // Whitespace-only is rejected
        let result = Secret::basic_password("c", None, "u", "p", "  ");
        assert!(matches!(result, Err(SecretError::InvalidUrl(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let secret = Secret::nusnet(
            "NUSNetName2",
            Some("FolderName"),
            "e081888@u.nus.edu",
            "Lorem Ipsum 12",
        )
        .unwrap();

        let json = serde_json::to_string(&secret).unwrap();
        let parsed: Secret = serde_json::from_str(&json).unwrap();
        assert_eq!(secret, parsed);
    }
}
