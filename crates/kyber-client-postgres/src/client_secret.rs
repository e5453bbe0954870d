//! Client secret storage.
//!
//! Rows live in the `kyber_client_secret` table created by the embedded
//! migrations.
//!
//! This module provides two layers:
//! - [`insert`] / [`find_by_client_id`] - queries that run on any executor the
//!   caller hands in (`&PgPool`, `&mut PgConnection`, or a transaction)
//! - [`PostgresClientSecretStorage`] - implements the `ClientSecretStorage`
//!   trait from `kyber-client` on top of a borrowed pool

use async_trait::async_trait;
use sqlx_core::executor::Executor;
use sqlx_core::query_as::query_as;
use sqlx_core::query_scalar::query_scalar;
use sqlx_postgres::Postgres;
use tracing::{debug, instrument};

use kyber_client::ClientSecretStorage as ClientSecretStorageTrait;
use kyber_client::{ClientSecret, StoreError, StoreResult};

use crate::PgPool;
use crate::error::store_error;

// =============================================================================
// Queries
// =============================================================================

/// Inserts `secret` and writes the assigned `pk` back into `secret.id`.
///
/// # Errors
///
/// Returns a normalized [`StoreError`] if the insert fails.
#[instrument(skip(executor, secret), fields(client_id = %secret.client_id))]
pub async fn insert<'c, E>(executor: E, secret: &mut ClientSecret) -> StoreResult<()>
where
    E: Executor<'c, Database = Postgres>,
{
    let id: i64 = query_scalar(
        r#"
        INSERT INTO kyber_client_secret (client_id, client_secret_plaintext)
        VALUES ($1, $2)
        RETURNING pk
        "#,
    )
    .bind(secret.client_id.as_str())
    .bind(secret.client_secret_plaintext.as_str())
    .fetch_one(executor)
    .await
    .map_err(|e| {
        let err = store_error(e, &secret.client_id);
        debug!(category = %err.category(), "Failed to store client secret");
        err
    })?;

    secret.id = id;
    debug!(id, "Stored client secret");
    Ok(())
}

/// Finds the most recently created secret for `client_id`.
///
/// Returns `None` if no row matches.
///
/// # Errors
///
/// Returns a normalized [`StoreError`] if the query fails.
#[instrument(skip(executor))]
pub async fn find_by_client_id<'c, E>(
    executor: E,
    client_id: &str,
) -> StoreResult<Option<ClientSecret>>
where
    E: Executor<'c, Database = Postgres>,
{
    let row: Option<(i64, String, String)> = query_as(
        r#"
        SELECT pk, client_id, client_secret_plaintext
        FROM kyber_client_secret
        WHERE client_id = $1
        ORDER BY pk DESC
        LIMIT 1
        "#,
    )
    .bind(client_id)
    .fetch_optional(executor)
    .await
    .map_err(|e| {
        let err = store_error(e, client_id);
        debug!(category = %err.category(), "Failed to look up client secret");
        err
    })?;

    Ok(row.map(|(id, client_id, client_secret_plaintext)| ClientSecret {
        id,
        client_id,
        client_secret_plaintext,
    }))
}

/// Like [`find_by_client_id`], but a missing row is `StoreError::NotFound`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no row matches, or a normalized error if
/// the query fails.
pub async fn get_by_client_id<'c, E>(executor: E, client_id: &str) -> StoreResult<ClientSecret>
where
    E: Executor<'c, Database = Postgres>,
{
    find_by_client_id(executor, client_id)
        .await?
        .ok_or_else(|| StoreError::not_found(client_id))
}

// =============================================================================
// PostgreSQL Client Secret Storage Trait Implementation
// =============================================================================

/// PostgreSQL implementation of the `ClientSecretStorage` trait from `kyber-client`.
///
/// Every call checks a connection out of the borrowed pool. Use the free
/// functions in this module to run inside a caller-owned transaction.
///
/// # Example
///
/// ```ignore
/// use kyber_client::{ClientSecret, ClientSecretStorage};
/// use kyber_client_postgres::PostgresClientSecretStorage;
///
/// let storage = PostgresClientSecretStorage::new(&pool);
/// let mut secret = ClientSecret::new("my-app", "s3cr3t");
/// storage.create_client_secret(&mut secret).await?;
/// ```
pub struct PostgresClientSecretStorage<'a> {
    pool: &'a PgPool,
}

impl<'a> PostgresClientSecretStorage<'a> {
    /// Create a new PostgreSQL client secret storage.
    #[must_use]
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientSecretStorageTrait for PostgresClientSecretStorage<'_> {
    async fn create_client_secret(&self, secret: &mut ClientSecret) -> StoreResult<()> {
        insert(self.pool, secret).await
    }

    async fn get_client_secret(&self, client_id: &str) -> StoreResult<ClientSecret> {
        get_by_client_id(self.pool, client_id).await
    }
}
