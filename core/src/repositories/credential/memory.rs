//! In-memory implementation of CredentialRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Credential;
use crate::errors::DomainError;

use super::trait_::CredentialRepository;

/// Credential repository backed by a map, for tests and local development
#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    credentials: Arc<RwLock<HashMap<String, Credential>>>,
}

impl InMemoryCredentialRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with credentials
    pub fn with_credentials(credentials: impl IntoIterator<Item = Credential>) -> Self {
        let map = credentials
            .into_iter()
            .map(|c| (c.username.clone(), c))
            .collect();
        Self {
            credentials: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace a credential
    pub async fn insert(&self, credential: Credential) {
        let mut credentials = self.credentials.write().await;
        credentials.insert(credential.username.clone(), credential);
    }

    pub async fn len(&self) -> usize {
        self.credentials.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.credentials.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DomainError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.get(username).cloned())
    }
}
