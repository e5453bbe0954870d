//! In-memory client secret storage.
//!
//! Rows are kept in insertion order, so the most recently created secret for
//! a client is the last matching row. Intended for development and tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{StoreError, StoreResult};
use crate::storage::ClientSecretStorage;
use crate::types::ClientSecret;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<ClientSecret>,
    last_id: i64,
}

/// In-memory client secret storage backend.
#[derive(Debug, Default)]
pub struct InMemoryClientSecretStorage {
    table: RwLock<Table>,
    closed: AtomicBool,
}

impl InMemoryClientSecretStorage {
    /// Creates an empty, open storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the storage. Every later call fails with `StoreError::Unavailable`,
    /// the same way a closed connection pool behaves.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if [`close`](Self::close) was called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.is_closed() {
            return Err(StoreError::unavailable("in-memory storage is closed"));
        }
        Ok(())
    }
}

/// PostgreSQL `text` cannot hold NUL, so reject it here too.
fn reject_nul(value: &str) -> StoreResult<()> {
    if value.contains('\0') {
        return Err(StoreError::unknown(
            "invalid byte sequence for encoding \"UTF8\": 0x00",
        ));
    }
    Ok(())
}

#[async_trait]
impl ClientSecretStorage for InMemoryClientSecretStorage {
    #[instrument(skip(self, secret), fields(client_id = %secret.client_id))]
    async fn create_client_secret(&self, secret: &mut ClientSecret) -> StoreResult<()> {
        self.ensure_open()?;
        reject_nul(&secret.client_id)?;
        reject_nul(&secret.client_secret_plaintext)?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.push(ClientSecret {
            id,
            client_id: secret.client_id.clone(),
            client_secret_plaintext: secret.client_secret_plaintext.clone(),
        });
        secret.id = id;

        debug!(id, "Stored client secret");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_client_secret(&self, client_id: &str) -> StoreResult<ClientSecret> {
        self.ensure_open()?;
        reject_nul(client_id)?;

        let table = self.table.read().await;
        table
            .rows
            .iter()
            .rev()
            .find(|row| row.client_id == client_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(client_id))
    }
}
