//! User accounts.
//!
//! The shared data model defines users but no HTTP route exposes them yet.
//! Records live at `users/id/<zero-padded id>`, with a username index at
//! `users/name/<username>` holding the id. Passwords are stored as
//! `SHA-256(salt || password)` with a random per-user salt.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use tracing::info;

use engn_storage::StorageBackend;

use crate::error::{StoreError, UserError};
use crate::model::{NewUser, User};

const USER_PREFIX: &str = "users/id/";
const NAME_PREFIX: &str = "users/name/";

fn user_key(id: u64) -> String {
    format!("{USER_PREFIX}{id:020}")
}

fn name_key(username: &str) -> String {
    format!("{NAME_PREFIX}{username}")
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

impl User {
    /// Check a candidate password against the stored digest in constant time.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        let computed = digest(&self.salt, candidate);
        computed
            .as_bytes()
            .ct_eq(self.password_hash.as_bytes())
            .into()
    }
}

/// Creates and looks up users.
pub struct UserStore {
    storage: Arc<dyn StorageBackend>,
    /// Next id; the lock also serializes the username uniqueness check.
    next_id: Mutex<u64>,
}

impl UserStore {
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            storage,
            next_id: Mutex::new(1),
        }
    }

    /// Create a user with a unique username.
    ///
    /// The record is written before the username index, so a failure between
    /// the two writes leaves the username free to claim again.
    ///
    /// # Errors
    ///
    /// - [`UserError::UsernameTaken`] if the username already exists.
    /// - [`UserError::Store`] if storage fails.
    pub async fn create_user(&self, new: NewUser) -> Result<User, UserError> {
        let mut next_id = self.next_id.lock().await;

        if self.storage.exists(&name_key(&new.username)).await? {
            return Err(UserError::UsernameTaken {
                username: new.username,
            });
        }

        let id = *next_id;
        *next_id = id.saturating_add(1);

        let salt = hex::encode(uuid::Uuid::new_v4().as_bytes());
        let user = User {
            id,
            password_hash: digest(&salt, &new.password),
            salt,
            username: new.username,
        };

        let key = user_key(id);
        let bytes = serde_json::to_vec(&user).map_err(|e| StoreError::Encode {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        self.storage.put(&key, &bytes).await?;
        self.storage
            .put(&name_key(&user.username), id.to_string().as_bytes())
            .await?;
        drop(next_id);

        info!(user_id = id, "user created");
        Ok(user)
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Store`] if storage fails or the record is corrupt.
    pub async fn get_user(&self, id: u64) -> Result<Option<User>, UserError> {
        let key = user_key(id);
        let Some(bytes) = self.storage.get(&key).await? else {
            return Ok(None);
        };
        let user = serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
            key,
            reason: e.to_string(),
        })?;
        Ok(Some(user))
    }

    /// Look up a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Store`] if storage fails or the index entry is
    /// corrupt.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let key = name_key(username);
        let Some(bytes) = self.storage.get(&key).await? else {
            return Ok(None);
        };
        let id = std::str::from_utf8(&bytes)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| StoreError::Corrupt {
                key,
                reason: "username index does not hold a numeric id".to_owned(),
            })?;
        self.get_user(id).await
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use engn_storage::MemoryBackend;

    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_owned(),
            password: "correct horse".to_owned(),
        }
    }

    fn store() -> UserStore {
        UserStore::new(Arc::new(MemoryBackend::new()))
    }

    #[tokio::test]
    async fn create_and_fetch_by_id_and_name() {
        let store = store();
        let user = store.create_user(new_user("admin")).await.unwrap();
        assert_eq!(user.id, 1);

        assert_eq!(store.get_user(1).await.unwrap(), Some(user.clone()));
        assert_eq!(
            store.get_user_by_username("admin").await.unwrap(),
            Some(user)
        );
        assert_eq!(store.get_user_by_username("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = store();
        store.create_user(new_user("admin")).await.unwrap();
        let err = store.create_user(new_user("admin")).await.unwrap_err();
        assert!(matches!(err, UserError::UsernameTaken { ref username } if username == "admin"));

        let next = store.create_user(new_user("editor")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn password_is_not_stored_in_plain_text() {
        let store = store();
        let user = store.create_user(new_user("admin")).await.unwrap();
        assert_ne!(user.password_hash, "correct horse");
        assert!(user.verify_password("correct horse"));
        assert!(!user.verify_password("wrong horse"));
    }

    #[tokio::test]
    async fn same_password_gets_different_digests() {
        let store = store();
        let a = store.create_user(new_user("a")).await.unwrap();
        let b = store.create_user(new_user("b")).await.unwrap();
        assert_ne!(a.password_hash, b.password_hash);
    }
}
