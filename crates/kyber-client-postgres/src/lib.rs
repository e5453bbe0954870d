//! PostgreSQL storage backend for Kyber client secrets.
//!
//! Client secrets are stored in the `kyber_client_secret` table, created by
//! the embedded migrations in [`migrations`].
//!
//! # Example
//!
//! ```ignore
//! use kyber_client::{ClientSecret, ClientSecretStorage};
//! use kyber_client_postgres::{PostgresConfig, PostgresStorage};
//!
//! let storage = PostgresStorage::connect(&PostgresConfig::new("postgres://localhost/kyber")).await?;
//!
//! let mut secret = ClientSecret::new("my-app", "s3cr3t");
//! storage.client_secrets().create_client_secret(&mut secret).await?;
//!
//! // Inside a caller-owned transaction
//! let mut tx = storage.pool().begin().await?;
//! let found = kyber_client_postgres::client_secret::get_by_client_id(&mut *tx, "my-app").await?;
//! tx.commit().await?;
//! ```

pub mod client_secret;
pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod storage_adapters;

use std::sync::Arc;

use kyber_client::StoreResult;
use tracing::info;

pub use client_secret::PostgresClientSecretStorage;
pub use config::PostgresConfig;
pub use error::{PostgresError, Result};
pub use storage_adapters::ArcClientSecretStorage;

/// PostgreSQL connection pool type alias.
pub type PgPool = sqlx_postgres::PgPool;

// =============================================================================
// PostgreSQL Storage
// =============================================================================

/// PostgreSQL storage backend for client secrets.
///
/// Holds a connection pool and hands out storage views over it.
#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: Arc<PgPool>,
}

impl PostgresStorage {
    /// Create new storage with an existing connection pool.
    #[must_use]
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create new storage by connecting to the database.
    ///
    /// Runs the embedded migrations when `config.run_migrations` is set,
    /// otherwise checks that the pool can serve a query.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection, the check or a migration fails.
    pub async fn connect(config: &PostgresConfig) -> Result<Self> {
        let pool = pool::create_pool(config).await?;

        if config.run_migrations {
            migrations::run(&pool).await?;
        } else {
            info!("Skipping database migrations");
            pool::check_connection(&pool).await?;
        }

        Ok(Self::new(Arc::new(pool)))
    }

    /// Get a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get a reference to the Arc-wrapped pool.
    #[must_use]
    pub fn pool_arc(&self) -> Arc<PgPool> {
        Arc::clone(&self.pool)
    }

    /// Get client secret storage operations.
    #[must_use]
    pub fn client_secrets(&self) -> PostgresClientSecretStorage<'_> {
        PostgresClientSecretStorage::new(&self.pool)
    }

    /// Get an owning client secret storage, suitable for `Arc<dyn ClientSecretStorage>`.
    #[must_use]
    pub fn shared_client_secrets(&self) -> ArcClientSecretStorage {
        ArcClientSecretStorage::new(self.pool_arc())
    }

    /// Checks that the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if no query can be served.
    pub async fn health_check(&self) -> StoreResult<()> {
        pool::check_connection(&self.pool).await?;
        Ok(())
    }

    /// Close the pool. Later storage calls fail with `StoreError::Unavailable`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
