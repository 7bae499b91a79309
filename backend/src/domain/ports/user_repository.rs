//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserSearch};
use crate::pipeline::RequestContext;

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// The backing store could not be reached.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// A query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// The caller cancelled before the operation started.
    #[error("user repository operation cancelled")]
    Cancelled,
}

impl UserPersistenceError {
    /// Build a [`UserPersistenceError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`UserPersistenceError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence boundary for the user aggregate.
///
/// Every operation suspends, observes the context's cancellation signal
/// before touching the store, and loads the contact detail together with
/// its user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch one user by identifier.
    async fn get(
        &self,
        id: i64,
        cx: &RequestContext,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch every user matching the search criteria.
    async fn find(
        &self,
        criteria: &UserSearch,
        cx: &RequestContext,
    ) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch the 1-indexed `page_number` of `page_size` users.
    async fn paginate(
        &self,
        page_number: i64,
        page_size: i64,
        cx: &RequestContext,
    ) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a user, assigning its identifier.
    async fn add(&self, user: NewUser, cx: &RequestContext)
        -> Result<User, UserPersistenceError>;

    /// Overwrite a stored user.
    async fn update(&self, user: User, cx: &RequestContext)
        -> Result<User, UserPersistenceError>;

    /// Remove a user, returning the former state when it existed.
    async fn delete(
        &self,
        id: i64,
        cx: &RequestContext,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Total number of stored users.
    async fn count(&self, cx: &RequestContext) -> Result<i64, UserPersistenceError>;
}
