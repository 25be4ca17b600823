//! Lead store.
//!
//! Assigns ids to validated submissions and keeps them in the injected
//! storage backend at `leads/<zero-padded id>`. Zero padding keeps the
//! backend's key order equal to id order.
//!
//! Id assignment and the write happen under one async mutex, so concurrent
//! `create` calls on a shared store always observe unique, strictly
//! increasing ids. An id consumed by a failed write is not handed out again.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use engn_storage::StorageBackend;

use crate::error::StoreError;
use crate::model::{Lead, NewLead};

/// Storage prefix for lead records.
const LEAD_PREFIX: &str = "leads/";

fn lead_key(id: u64) -> String {
    format!("{LEAD_PREFIX}{id:020}")
}

/// Holds accepted leads and hands out their ids.
pub struct LeadStore {
    storage: Arc<dyn StorageBackend>,
    next_id: Mutex<u64>,
}

impl LeadStore {
    /// Create a store whose first lead gets id 1.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            storage,
            next_id: Mutex::new(1),
        }
    }

    /// Create a store that continues after the highest id already present
    /// in `storage`. An empty backend behaves like [`LeadStore::new`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the key listing fails, or
    /// [`StoreError::Corrupt`] if a key under `leads/` has no numeric id.
    pub async fn open(storage: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        let keys = storage.list(LEAD_PREFIX).await?;
        let highest = match keys.last() {
            Some(key) => parse_id(key)?,
            None => 0,
        };
        debug!(existing = keys.len(), highest, "lead store opened");
        Ok(Self {
            storage,
            next_id: Mutex::new(highest.saturating_add(1)),
        })
    }

    /// Store a validated submission and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] or [`StoreError::Storage`] if the
    /// record cannot be written. Nothing is stored in that case.
    pub async fn create(&self, new: NewLead) -> Result<Lead, StoreError> {
        let mut next_id = self.next_id.lock().await;
        let id = *next_id;
        *next_id = id.saturating_add(1);

        let lead = Lead::from_new(id, new, Utc::now());
        let key = lead_key(id);
        let bytes = serde_json::to_vec(&lead).map_err(|e| StoreError::Encode {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        self.storage.put(&key, &bytes).await?;
        drop(next_id);

        info!(lead_id = id, model = %lead.model_interest, "lead created");
        Ok(lead)
    }

    /// Look up one lead.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the read fails or
    /// [`StoreError::Corrupt`] if the record cannot be decoded.
    pub async fn get(&self, id: u64) -> Result<Option<Lead>, StoreError> {
        let key = lead_key(id);
        match self.storage.get(&key).await? {
            Some(bytes) => decode(&key, &bytes).map(Some),
            None => Ok(None),
        }
    }

    /// All leads, most recently created first.
    ///
    /// Leads created within the same clock tick are ordered by id, highest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if listing or reading fails, or
    /// [`StoreError::Corrupt`] if any record cannot be decoded.
    pub async fn list(&self) -> Result<Vec<Lead>, StoreError> {
        let keys = self.storage.list(LEAD_PREFIX).await?;
        let mut leads = Vec::with_capacity(keys.len());
        for key in &keys {
            // A key listed but gone by the time it is read was never written
            // by this store; skip it rather than fail the whole listing.
            if let Some(bytes) = self.storage.get(key).await? {
                leads.push(decode(key, &bytes)?);
            }
        }
        leads.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(leads)
    }

    /// Number of stored leads.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the key listing fails.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.storage.list(LEAD_PREFIX).await?.len())
    }
}

impl std::fmt::Debug for LeadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadStore").finish_non_exhaustive()
    }
}

fn decode(key: &str, bytes: &[u8]) -> Result<Lead, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt {
        key: key.to_owned(),
        reason: e.to_string(),
    })
}

fn parse_id(key: &str) -> Result<u64, StoreError> {
    key.strip_prefix(LEAD_PREFIX)
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| StoreError::Corrupt {
            key: key.to_owned(),
            reason: "key does not end in a numeric lead id".to_owned(),
        })
}
