//! Client secret persistence for Kyber.
//!
//! Provides:
//!
//! - [`ClientSecret`] - the stored record (table `kyber_client_secret`)
//! - [`ClientSecretStorage`] - backend-agnostic create/lookup operations
//! - [`StoreError`] - normalized error classification shared by all backends
//! - [`InMemoryClientSecretStorage`] - in-memory backend for development and tests
//!
//! The PostgreSQL backend lives in `kyber-client-postgres`.

pub mod error;
pub mod memory;
pub mod storage;
pub mod types;

pub use error::{ErrorCategory, StoreError, StoreResult};
pub use memory::InMemoryClientSecretStorage;
pub use storage::ClientSecretStorage;
pub use types::ClientSecret;
