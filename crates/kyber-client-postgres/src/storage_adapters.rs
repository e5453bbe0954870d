//! Arc-owning storage adapter.
//!
//! Wraps the lifetime-based storage and owns an `Arc<PgPool>`, so it can be
//! shared as `Arc<dyn ClientSecretStorage>` across tasks.

use std::sync::Arc;

use async_trait::async_trait;

use kyber_client::ClientSecretStorage as ClientSecretStorageTrait;
use kyber_client::{ClientSecret, StoreResult};

use crate::PgPool;
use crate::client_secret::PostgresClientSecretStorage;

/// Arc-owning PostgreSQL client secret storage adapter.
#[derive(Debug, Clone)]
pub struct ArcClientSecretStorage {
    pool: Arc<PgPool>,
}

impl ArcClientSecretStorage {
    /// Create a new Arc-owning client secret storage.
    #[must_use]
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ClientSecretStorageTrait for ArcClientSecretStorage {
    async fn create_client_secret(&self, secret: &mut ClientSecret) -> StoreResult<()> {
        let storage = PostgresClientSecretStorage::new(&self.pool);
        storage.create_client_secret(secret).await
    }

    async fn get_client_secret(&self, client_id: &str) -> StoreResult<ClientSecret> {
        let storage = PostgresClientSecretStorage::new(&self.pool);
        storage.get_client_secret(client_id).await
    }
}
