//! Error types for `engn-core`.
//!
//! Store errors carry the storage key involved so a failed request can be
//! traced from the logs alone. Lead contents never appear in error text.

use engn_storage::StorageError;

/// Errors from the lead and user stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend rejected the operation.
    #[error("store backend error: {0}")]
    Storage(#[from] StorageError),

    /// A record could not be serialized before writing.
    #[error("failed to encode record '{key}': {reason}")]
    Encode { key: String, reason: String },

    /// A stored record could not be decoded.
    #[error("corrupt record at '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

/// Errors from user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Another user already holds this username.
    #[error("username '{username}' is already taken")]
    UsernameTaken { username: String },

    /// The underlying store failed.
    #[error("user store error: {0}")]
    Store(#[from] StoreError),
}

impl From<StorageError> for UserError {
    fn from(err: StorageError) -> Self {
        Self::Store(StoreError::Storage(err))
    }
}
