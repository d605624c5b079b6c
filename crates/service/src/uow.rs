//! Unit-of-work contract.

use async_trait::async_trait;
use domain::Event;

use crate::error::UowError;
use crate::repository::UserRepository;

/// A scoped transactional boundary wrapping one repository.
///
/// Lifecycle: [`begin`](UserUnitOfWork::begin) opens a fresh repository scope
/// over the underlying transactional resource; repository operations stage
/// mutations; [`commit`](UserUnitOfWork::commit) applies them atomically or
/// [`rollback`](UserUnitOfWork::rollback) discards them. One unit of work
/// serves one in-flight logical operation; it is never shared between
/// concurrent `handle` calls.
#[async_trait]
pub trait UserUnitOfWork: Send + Sync {
    /// Begins a transaction with a fresh repository scope.
    async fn begin(&self) -> Result<(), UowError>;

    /// Returns the repository bound to the current scope.
    fn users(&self) -> &dyn UserRepository;

    /// Persists all staged mutations atomically.
    ///
    /// On underlying failure the unit of work rolls back before surfacing
    /// the error; it never leaves a half-applied state.
    async fn commit(&self) -> Result<(), UowError>;

    /// Discards all staged mutations.
    async fn rollback(&self) -> Result<(), UowError>;

    /// Drains buffered events from every aggregate in the touched set, in
    /// touched order, each buffer in emission order.
    ///
    /// Only a committed scope yields events. After rollback the buffers are
    /// discarded and the result is empty. A second call after a draining
    /// call returns empty (idempotent-empty, not idempotent-same).
    async fn harvest_events(&self) -> Vec<Event>;
}
