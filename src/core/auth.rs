//! Credential gate - A toy username/password check in front of the UI.
//!
//! Not a security mechanism: credentials are stored in plain text, there is
//! no hashing, expiry, or token issuance. The gate exists so the application
//! can be handed to a small office team with per-person usernames.

use crate::{
    errors::Result,
    storage::{self, KeyValueStorage, keys},
};
use serde::{Deserialize, Serialize};

/// A stored username/password pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Login name
    pub user: String,
    /// Plain-text password
    pub pass: String,
}

/// The ten built-in accounts (`admin1`/`admin1` through `admin10`/`admin10`),
/// used when no credential list has been stored.
#[must_use]
pub fn default_credentials() -> Vec<Credential> {
    (1..=10)
        .map(|i| Credential { user: format!("admin{i}"), pass: format!("admin{i}") })
        .collect()
}

fn credential_list(storage: &dyn KeyValueStorage) -> Vec<Credential> {
    match storage.get(keys::APP_USERS) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored credential list is corrupt, using defaults");
            default_credentials()
        }),
        _ => default_credentials(),
    }
}

/// Checks the supplied credentials against the stored list (or the defaults)
/// and, on success, records the session flags in storage.
///
/// # Errors
/// Returns an error if writing the session flags fails.
pub fn login(storage: &dyn KeyValueStorage, username: &str, password: &str) -> Result<bool> {
    let valid = credential_list(storage)
        .iter()
        .any(|c| c.user == username && c.pass == password);

    if valid {
        storage::store_json(storage, keys::AUTHENTICATED, &true)?;
        storage::store_json(storage, keys::CURRENT_USER, &username)?;
        tracing::info!(username, "login succeeded");
    } else {
        tracing::debug!(username, "login rejected");
    }

    Ok(valid)
}

/// Clears the session flags.
///
/// # Errors
/// Returns an error if removing the flags fails.
pub fn logout(storage: &dyn KeyValueStorage) -> Result<()> {
    storage.remove(keys::AUTHENTICATED)?;
    storage.remove(keys::CURRENT_USER)
}

/// Whether a login has been recorded.
#[must_use]
pub fn is_authenticated(storage: &dyn KeyValueStorage) -> bool {
    storage::load_json_or_default(storage, keys::AUTHENTICATED)
}

/// The username recorded by the last successful login, if any.
#[must_use]
pub fn current_user(storage: &dyn KeyValueStorage) -> Option<String> {
    storage::load_json_or_default(storage, keys::CURRENT_USER)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_default_accounts_accepted() {
        let storage = MemoryStorage::new();

        assert!(login(&storage, "admin1", "admin1").unwrap());
        assert!(is_authenticated(&storage));
        assert_eq!(current_user(&storage).as_deref(), Some("admin1"));

        assert!(login(&storage, "admin10", "admin10").unwrap());
    }

    #[test]
    fn test_wrong_credentials_rejected() {
        let storage = MemoryStorage::new();

        assert!(!login(&storage, "admin1", "wrong").unwrap());
        assert!(!login(&storage, "admin11", "admin11").unwrap());
        assert!(!is_authenticated(&storage));
        assert_eq!(current_user(&storage), None);
    }

    #[test]
    fn test_stored_list_overrides_defaults() {
        let storage = MemoryStorage::new();
        storage::store_json(
            &storage,
            keys::APP_USERS,
            &vec![Credential { user: "dina".to_string(), pass: "s3cret".to_string() }],
        )
        .unwrap();

        assert!(login(&storage, "dina", "s3cret").unwrap());
        // Defaults no longer apply once a list is stored
        assert!(!login(&storage, "admin1", "admin1").unwrap());
    }

    #[test]
    fn test_corrupt_stored_list_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        storage.set(keys::APP_USERS, "{broken").unwrap();

        assert!(login(&storage, "admin1", "admin1").unwrap());
    }

    #[test]
    fn test_logout_clears_session() {
        let storage = MemoryStorage::new();
        login(&storage, "admin1", "admin1").unwrap();

        logout(&storage).unwrap();

        assert!(!is_authenticated(&storage));
        assert_eq!(current_user(&storage), None);
    }
}
