//! In-memory storage backend.
//!
//! Keeps every record in a `BTreeMap` behind a `RwLock`. Nothing is written
//! to disk, so a process restart starts from an empty map. This is the
//! backend the server runs with.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::{StorageBackend, StorageError};

/// An in-memory storage backend backed by a `BTreeMap`.
///
/// Cloning is cheap and clones share the same map. Keys are kept sorted,
/// which makes prefix listing a single `BTreeMap::range` walk.
///
/// # Examples
///
/// ```
/// # use engn_storage::{MemoryBackend, StorageBackend};
/// # #[tokio::main]
/// # async fn main() {
/// let backend = MemoryBackend::new();
/// backend.put("leads/1", b"{}").await.unwrap();
/// let val = backend.get("leads/1").await.unwrap();
/// assert_eq!(val, Some(b"{}".to_vec()));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        data.insert(key.to_owned(), value.to_vec());
        debug!(key, bytes = value.len(), "memory backend put");
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let data = self.data.read().await;
        let keys = data
            .range(prefix.to_owned()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let data = self.data.read().await;
        Ok(data.contains_key(key))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("leads/404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_existing() {
        let backend = MemoryBackend::new();
        backend.put("key", b"v1").await.unwrap();
        backend.put("key", b"v2").await.unwrap();
        assert_eq!(backend.get("key").await.unwrap(), Some(b"v2".to_vec()));
        assert_eq!(backend.list("").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_with_prefix_is_sorted_and_scoped() {
        let backend = MemoryBackend::new();
        backend.put("leads/0002", b"2").await.unwrap();
        backend.put("leads/0001", b"1").await.unwrap();
        backend.put("users/0001", b"u").await.unwrap();

        let keys = backend.list("leads/").await.unwrap();
        assert_eq!(keys, vec!["leads/0001", "leads/0002"]);
    }

    #[tokio::test]
    async fn list_no_matches_returns_empty() {
        let backend = MemoryBackend::new();
        backend.put("users/0001", b"1").await.unwrap();
        assert!(backend.list("leads/").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exists_tracks_puts() {
        let backend = MemoryBackend::new();
        assert!(!backend.exists("key").await.unwrap());
        backend.put("key", b"val").await.unwrap();
        assert!(backend.exists("key").await.unwrap());
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let backend = MemoryBackend::new();
        let clone = backend.clone();
        backend.put("key", b"val").await.unwrap();
        assert_eq!(clone.get("key").await.unwrap(), Some(b"val".to_vec()));
        assert!(!clone.list("").await.unwrap().is_empty());
    }
}
