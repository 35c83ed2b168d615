//! In-memory user repository used by the mock backend and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::mock::SimulatedLatency;
use crate::user::{
    domain::{Email, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<BTreeMap<UserId, User>>>,
    latency: SimulatedLatency,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let state = users.into_iter().map(|user| (user.id(), user)).collect();
        Self {
            state: Arc::new(RwLock::new(state)),
            latency: SimulatedLatency::none(),
        }
    }

    /// Delays every call by the given latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    fn read(&self) -> UserRepositoryResult<RwLockReadGuard<'_, BTreeMap<UserId, User>>> {
        self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> UserRepositoryResult<RwLockWriteGuard<'_, BTreeMap<UserId, User>>> {
        self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        self.latency.wait().await;
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.latency.wait().await;
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>> {
        self.latency.wait().await;
        let users = self.read()?;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn upsert(&self, user: &User) -> UserRepositoryResult<()> {
        self.latency.wait().await;
        let mut users = self.write()?;
        let email_taken = users
            .values()
            .any(|existing| existing.email() == user.email() && existing.id() != user.id());
        if email_taken {
            return Err(UserRepositoryError::DuplicatedEmail(user.email().clone()));
        }
        users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.latency.wait().await;
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or(UserRepositoryError::NotFound(id))
    }

    async fn next_id(&self) -> UserRepositoryResult<UserId> {
        self.latency.wait().await;
        let users = self.read()?;
        let max = users.keys().next_back().map_or(0, |id| id.value());
        Ok(UserId::new(max.saturating_add(1)))
    }
}
