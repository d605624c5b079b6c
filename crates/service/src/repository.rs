//! Repository contract for user aggregates.

use async_trait::async_trait;
use common::UserId;
use domain::{CredentialsStatus, User};

use crate::error::RepositoryError;

/// Tracks and mutates user aggregates within one unit-of-work scope.
///
/// Every successful operation registers the aggregate it returned, created,
/// or mutated into the scope's touched set before returning, so the unit of
/// work can harvest buffered events after commit. Membership is
/// identity-based: the same logical user appears once no matter how many
/// operations touched it. Removal also registers, so a `UserDeleted` event
/// buffered by the removed aggregate still gets harvested.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Adds a new aggregate to the scope.
    async fn add(&self, user: User) -> Result<(), RepositoryError>;

    /// Fetches an aggregate by ID.
    ///
    /// A missing ID is an error, not `None`, so downstream event production
    /// stays deterministic.
    async fn get(&self, user_id: UserId) -> Result<User, RepositoryError>;

    /// Records the credentials status reported by the auth service.
    async fn update_credentials_status(
        &self,
        user_id: UserId,
        status: CredentialsStatus,
    ) -> Result<(), RepositoryError>;

    /// Replaces the user's profile photo.
    async fn update_photo(&self, user_id: UserId, photo: String) -> Result<(), RepositoryError>;

    /// Removes an aggregate from the scope.
    async fn remove(&self, user_id: UserId) -> Result<(), RepositoryError>;
}

// Allow decorators to wrap a borrowed repository, e.g. the one owned by a
// unit of work.
#[async_trait]
impl<T: UserRepository + ?Sized> UserRepository for &T {
    async fn add(&self, user: User) -> Result<(), RepositoryError> {
        (**self).add(user).await
    }

    async fn get(&self, user_id: UserId) -> Result<User, RepositoryError> {
        (**self).get(user_id).await
    }

    async fn update_credentials_status(
        &self,
        user_id: UserId,
        status: CredentialsStatus,
    ) -> Result<(), RepositoryError> {
        (**self).update_credentials_status(user_id, status).await
    }

    async fn update_photo(&self, user_id: UserId, photo: String) -> Result<(), RepositoryError> {
        (**self).update_photo(user_id, photo).await
    }

    async fn remove(&self, user_id: UserId) -> Result<(), RepositoryError> {
        (**self).remove(user_id).await
    }
}
