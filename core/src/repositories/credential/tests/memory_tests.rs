//! Tests for the in-memory credential repository

use crate::domain::entities::{Credential, Role};
use crate::repositories::{CredentialRepository, InMemoryCredentialRepository};

#[tokio::test]
async fn test_find_by_username() {
    let repo = InMemoryCredentialRepository::with_credentials(vec![
        Credential::new("alice", "hash-a", Role::Client),
        Credential::new("bob", "hash-b", Role::Freelancer),
    ]);

    let found = repo.find_by_username("alice").await.unwrap();
    assert_eq!(found.map(|c| c.role), Some(Role::Client));

    let missing = repo.find_by_username("carol").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let repo = InMemoryCredentialRepository::with_credentials(vec![Credential::new(
        "alice",
        "hash-a",
        Role::Client,
    )]);

    assert!(repo.find_by_username("Alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_replaces_existing() {
    let repo = InMemoryCredentialRepository::new();
    assert!(repo.is_empty().await);

    repo.insert(Credential::new("alice", "old", Role::Client)).await;
    repo.insert(Credential::new("alice", "new", Role::Admin)).await;

    assert_eq!(repo.len().await, 1);
    let found = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(found.password_hash, "new");
    assert_eq!(found.role, Role::Admin);
}
