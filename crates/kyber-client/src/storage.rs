//! Client secret storage trait.
//!
//! Defines the interface for client secret persistence operations.
//! Implementations are provided by storage backends (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::ClientSecret;

/// Storage operations for OAuth 2.0 client secrets.
///
/// No uniqueness is enforced on `client_id`: several secrets may be stored
/// for one client. Lookups return the most recently created one.
///
/// Values containing a NUL character cannot be stored in PostgreSQL `text`
/// columns. Every backend rejects them with `StoreError::Unknown`.
///
/// # Example
///
/// ```ignore
/// use kyber_client::{ClientSecret, ClientSecretStorage};
///
/// async fn example(storage: &impl ClientSecretStorage) -> kyber_client::StoreResult<()> {
///     let mut secret = ClientSecret::new("my-app", "s3cr3t");
///     storage.create_client_secret(&mut secret).await?;
///
///     let found = storage.get_client_secret("my-app").await?;
///     assert_eq!(found.id, secret.id);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ClientSecretStorage: Send + Sync {
    /// Persist a new client secret.
    ///
    /// On success the storage-assigned key is written to `secret.id`; the
    /// other fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`StoreError`](crate::StoreError) if the backend
    /// rejects the insert or cannot be reached.
    async fn create_client_secret(&self, secret: &mut ClientSecret) -> StoreResult<()>;

    /// Find the client secret stored for `client_id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing is stored for the client,
    /// or another normalized error if the lookup fails.
    async fn get_client_secret(&self, client_id: &str) -> StoreResult<ClientSecret>;
}
