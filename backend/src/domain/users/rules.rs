//! Cross-cutting validation rules over the user repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, user_not_found};
use crate::domain::Error;
use crate::pipeline::{AsyncRule, RequestContext};

/// Asynchronous rule asserting that the user named by an identifier field
/// exists.
///
/// Reused by every command targeting an existing user. Register it behind
/// a `when` guard on the same field's `id > 0` rule so obviously invalid
/// identifiers never reach the repository.
pub struct UserExists<R> {
    repository: Arc<dyn UserRepository>,
    id_of: fn(&R) -> i64,
}

impl<R> UserExists<R> {
    /// Rule reading the identifier out of a request with `id_of`.
    pub fn new(repository: Arc<dyn UserRepository>, id_of: fn(&R) -> i64) -> Self {
        Self { repository, id_of }
    }
}

#[async_trait]
impl<R: Send + Sync> AsyncRule<R> for UserExists<R> {
    async fn check(&self, request: &R, cx: &RequestContext) -> Result<Option<String>, Error> {
        let id = (self.id_of)(request);
        let user = self
            .repository
            .get(id, cx)
            .await
            .map_err(map_repository_error)?;
        match user {
            Some(_) => Ok(None),
            None => Err(user_not_found(id)),
        }
    }
}
