//! Read-through caching decorator for repositories.
//!
//! Explicit decorator composition: the cache wraps any [`UserRepository`]
//! behind the same trait and delegates, instead of patching methods onto a
//! base implementation. Reads populate the cache; every write delegates and
//! then invalidates the cached entry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::UserId;
use domain::{CredentialsStatus, User};

use crate::error::RepositoryError;
use crate::repository::UserRepository;

/// A `UserRepository` decorator with a read-through cache.
pub struct CachingUserRepository<R: UserRepository> {
    inner: R,
    cache: Arc<RwLock<HashMap<UserId, User>>>,
}

impl<R: UserRepository> CachingUserRepository<R> {
    /// Wraps the given repository.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of cached entries.
    pub fn cached_count(&self) -> usize {
        self.cache.read().unwrap().len()
    }

    /// Returns true if the user is currently cached.
    pub fn is_cached(&self, user_id: UserId) -> bool {
        self.cache.read().unwrap().contains_key(&user_id)
    }

    fn invalidate(&self, user_id: UserId) {
        self.cache.write().unwrap().remove(&user_id);
    }
}

#[async_trait]
impl<R: UserRepository> UserRepository for CachingUserRepository<R> {
    async fn add(&self, user: User) -> Result<(), RepositoryError> {
        let user_id = user.id();
        self.inner.add(user).await?;
        self.invalidate(user_id);
        Ok(())
    }

    async fn get(&self, user_id: UserId) -> Result<User, RepositoryError> {
        if let Some(user) = self.cache.read().unwrap().get(&user_id) {
            return Ok(user.clone());
        }
        let user = self.inner.get(user_id).await?;
        self.cache
            .write()
            .unwrap()
            .insert(user_id, user.snapshot());
        Ok(user)
    }

    async fn update_credentials_status(
        &self,
        user_id: UserId,
        status: CredentialsStatus,
    ) -> Result<(), RepositoryError> {
        self.inner
            .update_credentials_status(user_id, status)
            .await?;
        self.invalidate(user_id);
        Ok(())
    }

    async fn update_photo(&self, user_id: UserId, photo: String) -> Result<(), RepositoryError> {
        self.inner.update_photo(user_id, photo).await?;
        self.invalidate(user_id);
        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> Result<(), RepositoryError> {
        self.inner.remove(user_id).await?;
        self.invalidate(user_id);
        Ok(())
    }
}
