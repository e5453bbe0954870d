//! Client secret record.
//!
//! One row of the `kyber_client_secret` table. The surrogate key is assigned
//! by the storage backend and is never part of the JSON representation.

use serde::{Deserialize, Serialize};

/// A secret belonging to an OAuth 2.0 client.
///
/// The secret value is stored as given. Hashing, expiry and rotation are the
/// responsibility of whoever issues the secret.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientSecret {
    /// Storage-assigned surrogate key. `0` until the record is persisted.
    #[serde(skip)]
    pub id: i64,

    /// OAuth client_id owning this secret.
    pub client_id: String,

    /// Secret value in plaintext.
    pub client_secret_plaintext: String,
}

impl ClientSecret {
    /// Table backing client secret records.
    pub const TABLE_NAME: &'static str = "kyber_client_secret";

    /// Creates an unpersisted record.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret_plaintext: impl Into<String>) -> Self {
        Self {
            id: 0,
            client_id: client_id.into(),
            client_secret_plaintext: client_secret_plaintext.into(),
        }
    }

    /// Returns `true` once a storage backend has assigned a key.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

impl std::fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSecret")
            .field("id", &self.id)
            .field("client_id", &self.client_id)
            .field("client_secret_plaintext", &"<redacted>")
            .finish()
    }
}
