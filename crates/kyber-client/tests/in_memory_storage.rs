//! Behavioural tests for the client secret storage contract, run against the
//! in-memory backend.

use std::sync::Arc;

use kyber_client::{
    ClientSecret, ClientSecretStorage, ErrorCategory, InMemoryClientSecretStorage,
};

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let storage = InMemoryClientSecretStorage::new();

    let mut secret = ClientSecret::new("abc", "s3cr3t");
    storage
        .create_client_secret(&mut secret)
        .await
        .expect("create should succeed");

    assert!(secret.id > 0);
    assert_eq!(secret.client_id, "abc");
    assert_eq!(secret.client_secret_plaintext, "s3cr3t");

    let found = storage
        .get_client_secret("abc")
        .await
        .expect("stored secret should be found");
    assert_eq!(found, secret);
}

#[tokio::test]
async fn test_get_unknown_client_is_not_found() {
    let storage = InMemoryClientSecretStorage::new();

    let mut secret = ClientSecret::new("abc", "s3cr3t");
    storage.create_client_secret(&mut secret).await.unwrap();

    let err = storage
        .get_client_secret("does-not-exist")
        .await
        .expect_err("unknown client must not be found");
    assert!(err.is_not_found());
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[tokio::test]
async fn test_duplicate_client_id_returns_most_recent() {
    let storage = InMemoryClientSecretStorage::new();

    let mut older = ClientSecret::new("abc", "first");
    let mut newer = ClientSecret::new("abc", "second");
    storage.create_client_secret(&mut older).await.unwrap();
    storage.create_client_secret(&mut newer).await.unwrap();

    assert_ne!(older.id, newer.id);

    let found = storage.get_client_secret("abc").await.unwrap();
    assert_eq!(found.id, newer.id);
    assert_eq!(found.client_secret_plaintext, "second");
}

#[tokio::test]
async fn test_empty_values_are_accepted() {
    let storage = InMemoryClientSecretStorage::new();

    let mut secret = ClientSecret::new("", "");
    storage.create_client_secret(&mut secret).await.unwrap();

    let found = storage.get_client_secret("").await.unwrap();
    assert_eq!(found.id, secret.id);
}

#[tokio::test]
async fn test_failures_surface_as_unavailable() {
    let storage = InMemoryClientSecretStorage::new();

    let mut secret = ClientSecret::new("abc", "s3cr3t");
    storage.create_client_secret(&mut secret).await.unwrap();

    storage.close();

    let mut another = ClientSecret::new("xyz", "other");
    let err = storage
        .create_client_secret(&mut another)
        .await
        .expect_err("closed storage must reject writes");
    assert_eq!(err.category(), ErrorCategory::Unavailable);
    assert_eq!(another, ClientSecret::new("xyz", "other"));

    let err = storage
        .get_client_secret("abc")
        .await
        .expect_err("closed storage must reject reads");
    assert_eq!(err.category(), ErrorCategory::Unavailable);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_keys() {
    let storage: Arc<dyn ClientSecretStorage> = Arc::new(InMemoryClientSecretStorage::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let storage = Arc::clone(&storage);
            tokio::spawn(async move {
                let mut secret = ClientSecret::new(format!("client-{i}"), format!("secret-{i}"));
                storage.create_client_secret(&mut secret).await.map(|()| secret)
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let secret = handle.await.unwrap().unwrap();
        let found = storage.get_client_secret(&secret.client_id).await.unwrap();
        assert_eq!(found, secret);
        ids.push(secret.id);
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}
