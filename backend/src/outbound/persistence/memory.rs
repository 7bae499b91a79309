//! In-memory user repository.
//!
//! Backs the service with a `BTreeMap` behind an async `RwLock`. Iteration
//! order is ascending by id, which gives pagination a stable order without
//! a sort step. Identifiers are assigned from an atomic counter.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{ContactDetail, NewUser, User, UserSearch};
use crate::pipeline::RequestContext;

/// Thread-safe in-memory store for user records.
pub struct MemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Store pre-populated with a handful of demo users, for environments
    /// without durable storage.
    pub fn with_demo_data() -> Self {
        let users: BTreeMap<i64, User> = demo_users()
            .into_iter()
            .map(|user| (user.id, user))
            .collect();
        let next_id = users.keys().max().map_or(1, |id| id + 1);
        Self {
            users: RwLock::new(users),
            next_id: AtomicI64::new(next_id),
        }
    }

    fn ensure_active(cx: &RequestContext) -> Result<(), UserPersistenceError> {
        if cx.is_cancelled() {
            Err(UserPersistenceError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            given_names: "John".into(),
            last_name: "Doe".into(),
            contact_detail: Some(ContactDetail::new("john.doe@example.com", "0400000001")),
        },
        User {
            id: 2,
            given_names: "Jane".into(),
            last_name: "Doe".into(),
            contact_detail: Some(ContactDetail::new("jane.doe@example.com", "0400000002")),
        },
        User {
            id: 3,
            given_names: "Joe".into(),
            last_name: "Bloggs".into(),
            contact_detail: None,
        },
    ]
}

fn matches(user: &User, criteria: &UserSearch) -> bool {
    let contains = |field: &str, fragment: &Option<String>| {
        fragment
            .as_deref()
            .is_some_and(|fragment| field.contains(fragment))
    };
    contains(&user.given_names, &criteria.given_names)
        || contains(&user.last_name, &criteria.last_name)
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn get(
        &self,
        id: i64,
        cx: &RequestContext,
    ) -> Result<Option<User>, UserPersistenceError> {
        Self::ensure_active(cx)?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find(
        &self,
        criteria: &UserSearch,
        cx: &RequestContext,
    ) -> Result<Vec<User>, UserPersistenceError> {
        Self::ensure_active(cx)?;
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|user| matches(user, criteria))
            .cloned()
            .collect())
    }

    async fn paginate(
        &self,
        page_number: i64,
        page_size: i64,
        cx: &RequestContext,
    ) -> Result<Vec<User>, UserPersistenceError> {
        Self::ensure_active(cx)?;
        let skip = usize::try_from((page_number - 1).max(0) * page_size.max(0)).unwrap_or(0);
        let take = usize::try_from(page_size.max(0)).unwrap_or(0);
        let users = self.users.read().await;
        Ok(users.values().skip(skip).take(take).cloned().collect())
    }

    async fn add(
        &self,
        user: NewUser,
        cx: &RequestContext,
    ) -> Result<User, UserPersistenceError> {
        Self::ensure_active(cx)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = User {
            id,
            given_names: user.given_names,
            last_name: user.last_name,
            contact_detail: user.contact_detail,
        };
        let mut users = self.users.write().await;
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: User, cx: &RequestContext) -> Result<User, UserPersistenceError> {
        Self::ensure_active(cx)?;
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(UserPersistenceError::query(format!(
                "no stored user with id {} to update",
                user.id
            ))),
        }
    }

    async fn delete(
        &self,
        id: i64,
        cx: &RequestContext,
    ) -> Result<Option<User>, UserPersistenceError> {
        Self::ensure_active(cx)?;
        let mut users = self.users.write().await;
        Ok(users.remove(&id))
    }

    async fn count(&self, cx: &RequestContext) -> Result<i64, UserPersistenceError> {
        Self::ensure_active(cx)?;
        let users = self.users.read().await;
        Ok(i64::try_from(users.len()).unwrap_or(i64::MAX))
    }
}
