//! Delete a user by identifier.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, user_not_found, UserDto, UserExists};
use crate::domain::Error;
use crate::pipeline::rules::greater_than_zero;
use crate::pipeline::{Handle, Request, RequestContext, RuleSet};

/// Command removing one user record; responds with the former state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUserCommand {
    pub id: i64,
}

impl Request for DeleteUserCommand {
    type Response = UserDto;
    const NAME: &'static str = "DeleteUserCommand";
}

/// Rules: a positive identifier, then the guarded existence check.
pub(crate) fn validator(repository: Arc<dyn UserRepository>) -> RuleSet<DeleteUserCommand> {
    RuleSet::new()
        .rule("id", |command: &DeleteUserCommand| {
            greater_than_zero("id", command.id)
        })
        .async_rule_when(
            "id",
            |command: &DeleteUserCommand| command.id > 0,
            UserExists::new(repository, |command: &DeleteUserCommand| command.id),
        )
}

/// Handler for [`DeleteUserCommand`].
pub struct DeleteUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    /// Handler over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handle<DeleteUserCommand> for DeleteUserHandler {
    async fn handle(
        &self,
        command: DeleteUserCommand,
        cx: &RequestContext,
    ) -> Result<UserDto, Error> {
        let deleted = self
            .repository
            .delete(command.id, cx)
            .await
            .map_err(map_repository_error)?;
        // A concurrent delete can still win between validation and here.
        let deleted = deleted.ok_or_else(|| user_not_found(command.id))?;
        Ok(UserDto::from(deleted))
    }
}
