//! securenus - CLI secret manager
//!
//! Typed personal secrets (passwords, cards, wallets, institutional IDs,
//! wifi credentials) grouped into string-named folders. Listings always
//! go through the masked renderer, so sensitive values are shown as a
//! fixed 8-asterisk placeholder and never in plaintext.

pub mod render;
pub mod secret;
pub mod storage;
pub mod store;

pub use secret::{Secret, SecretError, DEFAULT_FOLDER};
pub use store::{SecretStore, StoreError};
