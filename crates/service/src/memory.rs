//! In-memory transactional store, repository, and unit of work.
//!
//! The store is the shared committed state; each unit-of-work scope works on
//! a staged copy and swaps it in on commit. This mirrors the transactional
//! contract of a database-backed implementation closely enough to exercise
//! every commit, rollback, and harvesting path in tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::UserId;
use domain::{CredentialsStatus, Event, User};

use crate::error::{RepositoryError, UowError};
use crate::repository::UserRepository;
use crate::uow::UserUnitOfWork;

/// Shared committed state, cloneable across unit-of-work instances.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of committed users.
    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    /// Returns the committed state of a user, if present.
    pub fn committed(&self, user_id: UserId) -> Option<User> {
        self.users.read().unwrap().get(&user_id).cloned()
    }

    fn snapshot(&self) -> HashMap<UserId, User> {
        self.users.read().unwrap().clone()
    }

    fn replace(&self, users: HashMap<UserId, User>) {
        *self.users.write().unwrap() = users;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TxState {
    #[default]
    Idle,
    Active,
    Committed,
    RolledBack,
}

#[derive(Default)]
struct ScopeState {
    staged: HashMap<UserId, User>,
    // Aggregates removed during this scope; kept so their buffered events
    // (UserDeleted) remain harvestable.
    graveyard: HashMap<UserId, User>,
    // Touched set: insertion order, identity-deduped.
    touched: Vec<UserId>,
    tx: TxState,
    fail_next_commit: bool,
}

impl ScopeState {
    fn touch(&mut self, user_id: UserId) {
        if !self.touched.contains(&user_id) {
            self.touched.push(user_id);
        }
    }

    fn discard_buffers(&mut self) {
        for user in self.staged.values_mut() {
            user.take_events();
        }
        for user in self.graveyard.values_mut() {
            user.take_events();
        }
    }
}

/// Repository over the staged working copy of one unit-of-work scope.
pub struct InMemoryUserRepository {
    scope: Arc<RwLock<ScopeState>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: User) -> Result<(), RepositoryError> {
        let mut scope = self.scope.write().unwrap();
        let user_id = user.id();
        if scope.staged.contains_key(&user_id) {
            return Err(RepositoryError::Duplicate(user_id));
        }
        scope.staged.insert(user_id, user);
        scope.touch(user_id);
        Ok(())
    }

    async fn get(&self, user_id: UserId) -> Result<User, RepositoryError> {
        let mut scope = self.scope.write().unwrap();
        let user = scope
            .staged
            .get(&user_id)
            .ok_or(RepositoryError::NotFound(user_id))?
            .snapshot();
        scope.touch(user_id);
        Ok(user)
    }

    async fn update_credentials_status(
        &self,
        user_id: UserId,
        status: CredentialsStatus,
    ) -> Result<(), RepositoryError> {
        let mut scope = self.scope.write().unwrap();
        let user = scope
            .staged
            .get_mut(&user_id)
            .ok_or(RepositoryError::NotFound(user_id))?;
        user.update_credentials_status(status);
        scope.touch(user_id);
        Ok(())
    }

    async fn update_photo(&self, user_id: UserId, photo: String) -> Result<(), RepositoryError> {
        let mut scope = self.scope.write().unwrap();
        let user = scope
            .staged
            .get_mut(&user_id)
            .ok_or(RepositoryError::NotFound(user_id))?;
        user.update_photo(photo);
        scope.touch(user_id);
        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> Result<(), RepositoryError> {
        let mut scope = self.scope.write().unwrap();
        let mut user = scope
            .staged
            .remove(&user_id)
            .ok_or(RepositoryError::NotFound(user_id))?;
        user.mark_deleted();
        scope.graveyard.insert(user_id, user);
        scope.touch(user_id);
        Ok(())
    }
}

/// Unit of work over the in-memory store.
pub struct InMemoryUserUnitOfWork {
    store: InMemoryUserStore,
    scope: Arc<RwLock<ScopeState>>,
    repo: InMemoryUserRepository,
}

impl InMemoryUserUnitOfWork {
    /// Creates a unit of work bound to the given store.
    pub fn new(store: InMemoryUserStore) -> Self {
        let scope = Arc::new(RwLock::new(ScopeState::default()));
        let repo = InMemoryUserRepository {
            scope: scope.clone(),
        };
        Self { store, scope, repo }
    }

    /// Makes the next commit fail, for failure-path tests.
    pub fn set_fail_next_commit(&self, fail: bool) {
        self.scope.write().unwrap().fail_next_commit = fail;
    }
}

#[async_trait]
impl UserUnitOfWork for InMemoryUserUnitOfWork {
    async fn begin(&self) -> Result<(), UowError> {
        let staged = self.store.snapshot();
        let mut scope = self.scope.write().unwrap();
        scope.staged = staged;
        scope.graveyard.clear();
        scope.touched.clear();
        scope.tx = TxState::Active;
        Ok(())
    }

    fn users(&self) -> &dyn UserRepository {
        &self.repo
    }

    async fn commit(&self) -> Result<(), UowError> {
        let mut scope = self.scope.write().unwrap();
        if scope.tx != TxState::Active {
            return Err(UowError::NotActive);
        }
        if scope.fail_next_commit {
            scope.fail_next_commit = false;
            scope.tx = TxState::RolledBack;
            return Err(UowError::Commit("transactional resource failure".into()));
        }
        let persisted = scope
            .staged
            .iter()
            .map(|(id, user)| (*id, user.snapshot()))
            .collect();
        self.store.replace(persisted);
        scope.tx = TxState::Committed;
        Ok(())
    }

    async fn rollback(&self) -> Result<(), UowError> {
        let mut scope = self.scope.write().unwrap();
        if scope.tx != TxState::Active {
            return Err(UowError::NotActive);
        }
        scope.tx = TxState::RolledBack;
        Ok(())
    }

    async fn harvest_events(&self) -> Vec<Event> {
        let mut scope = self.scope.write().unwrap();
        if scope.tx != TxState::Committed {
            scope.discard_buffers();
            return Vec::new();
        }
        let touched = scope.touched.clone();
        let mut events = Vec::new();
        for user_id in touched {
            if let Some(user) = scope.staged.get_mut(&user_id) {
                events.extend(user.take_events());
            }
            if let Some(user) = scope.graveyard.get_mut(&user_id) {
                events.extend(user.take_events());
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Email, Event, Password, UserProfile};

    fn new_user() -> User {
        let profile = UserProfile::with_email(Email::new("user@example.com").unwrap());
        let password = Password::new("long-enough-secret").unwrap();
        User::register(profile, &password)
    }

    #[tokio::test]
    async fn commit_persists_added_user() {
        let store = InMemoryUserStore::new();
        let uow = InMemoryUserUnitOfWork::new(store.clone());

        uow.begin().await.unwrap();
        let user = new_user();
        let user_id = user.id();
        uow.users().add(user).await.unwrap();
        uow.commit().await.unwrap();

        assert_eq!(store.user_count(), 1);
        assert_eq!(store.committed(user_id).unwrap().id(), user_id);
    }

    #[tokio::test]
    async fn rollback_leaves_store_untouched() {
        let store = InMemoryUserStore::new();
        let uow = InMemoryUserUnitOfWork::new(store.clone());

        uow.begin().await.unwrap();
        uow.users().add(new_user()).await.unwrap();
        uow.rollback().await.unwrap();

        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn harvest_after_commit_yields_buffered_events_once() {
        let uow = InMemoryUserUnitOfWork::new(InMemoryUserStore::new());

        uow.begin().await.unwrap();
        uow.users().add(new_user()).await.unwrap();
        uow.commit().await.unwrap();

        let events = uow.harvest_events().await;
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::UserCreated(_)));

        // Drain-once: a second harvest of the same scope is empty.
        assert!(uow.harvest_events().await.is_empty());
    }

    #[tokio::test]
    async fn harvest_after_rollback_is_empty() {
        let uow = InMemoryUserUnitOfWork::new(InMemoryUserStore::new());

        uow.begin().await.unwrap();
        uow.users().add(new_user()).await.unwrap();
        uow.rollback().await.unwrap();

        assert!(uow.harvest_events().await.is_empty());
    }

    #[tokio::test]
    async fn removed_user_still_harvested() {
        let store = InMemoryUserStore::new();
        let uow = InMemoryUserUnitOfWork::new(store.clone());

        uow.begin().await.unwrap();
        let user = new_user();
        let user_id = user.id();
        uow.users().add(user).await.unwrap();
        uow.commit().await.unwrap();
        uow.harvest_events().await;

        uow.begin().await.unwrap();
        uow.users().remove(user_id).await.unwrap();
        uow.commit().await.unwrap();

        let events = uow.harvest_events().await;
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::UserDeleted(_)));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let uow = InMemoryUserUnitOfWork::new(InMemoryUserStore::new());
        uow.begin().await.unwrap();

        let missing = UserId::new();
        let result = uow.users().get(missing).await;
        assert_eq!(result.unwrap_err(), RepositoryError::NotFound(missing));
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected() {
        let uow = InMemoryUserUnitOfWork::new(InMemoryUserStore::new());
        uow.begin().await.unwrap();

        let user = new_user();
        let user_id = user.id();
        uow.users().add(user.clone()).await.unwrap();
        let result = uow.users().add(user).await;
        assert_eq!(result.unwrap_err(), RepositoryError::Duplicate(user_id));
    }

    #[tokio::test]
    async fn touched_set_is_identity_deduped() {
        let uow = InMemoryUserUnitOfWork::new(InMemoryUserStore::new());

        uow.begin().await.unwrap();
        let user = new_user();
        let user_id = user.id();
        uow.users().add(user).await.unwrap();
        uow.users()
            .update_photo(user_id, "photos/1.jpg".into())
            .await
            .unwrap();
        uow.users().get(user_id).await.unwrap();
        uow.commit().await.unwrap();

        // One aggregate, touched three times, harvested as one buffer.
        let events = uow.harvest_events().await;
        assert_eq!(events.len(), 2); // UserCreated + PhotoUpdated
        assert!(matches!(events[0], Event::UserCreated(_)));
        assert!(matches!(events[1], Event::PhotoUpdated(_)));
    }

    #[tokio::test]
    async fn failed_commit_rolls_back_and_surfaces_error() {
        let store = InMemoryUserStore::new();
        let uow = InMemoryUserUnitOfWork::new(store.clone());
        uow.set_fail_next_commit(true);

        uow.begin().await.unwrap();
        uow.users().add(new_user()).await.unwrap();
        let result = uow.commit().await;

        assert!(matches!(result, Err(UowError::Commit(_))));
        assert_eq!(store.user_count(), 0);
        assert!(uow.harvest_events().await.is_empty());
    }

    #[tokio::test]
    async fn commit_without_begin_is_rejected() {
        let uow = InMemoryUserUnitOfWork::new(InMemoryUserStore::new());
        assert_eq!(uow.commit().await.unwrap_err(), UowError::NotActive);
        assert_eq!(uow.rollback().await.unwrap_err(), UowError::NotActive);
    }

    #[tokio::test]
    async fn fresh_scope_sees_committed_state() {
        let store = InMemoryUserStore::new();
        let uow = InMemoryUserUnitOfWork::new(store.clone());

        uow.begin().await.unwrap();
        let user = new_user();
        let user_id = user.id();
        uow.users().add(user).await.unwrap();
        uow.commit().await.unwrap();
        uow.harvest_events().await;

        let other = InMemoryUserUnitOfWork::new(store);
        other.begin().await.unwrap();
        let loaded = other.users().get(user_id).await.unwrap();
        assert_eq!(loaded.id(), user_id);
        assert_eq!(loaded.pending_events(), 0);
    }
}
