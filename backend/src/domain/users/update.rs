//! Overwrite a user's mutable fields.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, user_not_found, UserDto, UserExists};
use crate::domain::Error;
use crate::pipeline::rules::{greater_than_zero, not_empty};
use crate::pipeline::{Handle, Request, RequestContext, RuleSet};

/// Command replacing a user's names and contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub id: i64,
    pub given_names: String,
    pub last_name: String,
    pub email_address: String,
    pub mobile_number: String,
}

impl Request for UpdateUserCommand {
    type Response = UserDto;
    const NAME: &'static str = "UpdateUserCommand";
}

/// Rules: positive identifier, guarded existence check, non-empty fields.
pub(crate) fn validator(repository: Arc<dyn UserRepository>) -> RuleSet<UpdateUserCommand> {
    RuleSet::new()
        .rule("id", |command: &UpdateUserCommand| {
            greater_than_zero("id", command.id)
        })
        .async_rule_when(
            "id",
            |command: &UpdateUserCommand| command.id > 0,
            UserExists::new(repository, |command: &UpdateUserCommand| command.id),
        )
        .rule("givenNames", |command: &UpdateUserCommand| {
            not_empty("givenNames", &command.given_names)
        })
        .rule("lastName", |command: &UpdateUserCommand| {
            not_empty("lastName", &command.last_name)
        })
        .rule("emailAddress", |command: &UpdateUserCommand| {
            not_empty("emailAddress", &command.email_address)
        })
        .rule("mobileNumber", |command: &UpdateUserCommand| {
            not_empty("mobileNumber", &command.mobile_number)
        })
}

/// Handler for [`UpdateUserCommand`].
pub struct UpdateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    /// Handler over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handle<UpdateUserCommand> for UpdateUserHandler {
    async fn handle(
        &self,
        command: UpdateUserCommand,
        cx: &RequestContext,
    ) -> Result<UserDto, Error> {
        let user = self
            .repository
            .get(command.id, cx)
            .await
            .map_err(map_repository_error)?;
        let mut user = user.ok_or_else(|| user_not_found(command.id))?;

        user.given_names = command.given_names;
        user.last_name = command.last_name;
        let contact = user.contact_detail_mut();
        contact.email_address = command.email_address;
        contact.mobile_number = command.mobile_number;

        let updated = self
            .repository
            .update(user, cx)
            .await
            .map_err(map_repository_error)?;
        Ok(UserDto::from(updated))
    }
}
