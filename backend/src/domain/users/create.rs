//! Create a new user record.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, UserDto};
use crate::domain::{ContactDetail, Error, NewUser};
use crate::pipeline::rules::not_empty;
use crate::pipeline::{Handle, Request, RequestContext, RuleSet};

/// Command inserting a user with their contact detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub given_names: String,
    pub last_name: String,
    pub email_address: String,
    pub mobile_number: String,
}

impl Request for CreateUserCommand {
    type Response = UserDto;
    const NAME: &'static str = "CreateUserCommand";
}

pub(crate) fn validator() -> RuleSet<CreateUserCommand> {
    RuleSet::new()
        .rule("givenNames", |command: &CreateUserCommand| {
            not_empty("givenNames", &command.given_names)
        })
        .rule("lastName", |command: &CreateUserCommand| {
            not_empty("lastName", &command.last_name)
        })
        .rule("emailAddress", |command: &CreateUserCommand| {
            not_empty("emailAddress", &command.email_address)
        })
        .rule("mobileNumber", |command: &CreateUserCommand| {
            not_empty("mobileNumber", &command.mobile_number)
        })
}

/// Handler for [`CreateUserCommand`].
pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    /// Handler over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handle<CreateUserCommand> for CreateUserHandler {
    async fn handle(
        &self,
        command: CreateUserCommand,
        cx: &RequestContext,
    ) -> Result<UserDto, Error> {
        let CreateUserCommand {
            given_names,
            last_name,
            email_address,
            mobile_number,
        } = command;
        let user = NewUser {
            given_names,
            last_name,
            contact_detail: Some(ContactDetail::new(email_address, mobile_number)),
        };
        let stored = self
            .repository
            .add(user, cx)
            .await
            .map_err(map_repository_error)?;
        Ok(UserDto::from(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::User;
    use crate::pipeline::Validate;

    fn command() -> CreateUserCommand {
        CreateUserCommand {
            given_names: "Grace".into(),
            last_name: "Hopper".into(),
            email_address: "grace@example.com".into(),
            mobile_number: "0400000001".into(),
        }
    }

    #[tokio::test]
    async fn stores_the_contact_detail_with_the_user() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_add()
            .withf(|user, _cx| {
                user.contact_detail
                    .as_ref()
                    .is_some_and(|contact| contact.email_address == "grace@example.com")
            })
            .times(1)
            .returning(|user, _| {
                Ok(User {
                    id: 7,
                    given_names: user.given_names,
                    last_name: user.last_name,
                    contact_detail: user.contact_detail,
                })
            });

        let dto = CreateUserHandler::new(Arc::new(repository))
            .handle(command(), &RequestContext::new())
            .await
            .expect("create succeeds");

        assert_eq!(dto.id, 7);
        assert_eq!(dto.mobile_number.as_deref(), Some("0400000001"));
    }

    #[tokio::test]
    async fn validator_reports_every_empty_field() {
        let failures = validator()
            .validate(&CreateUserCommand::default(), &RequestContext::new())
            .await
            .expect("rules evaluate");

        let fields: Vec<&str> = failures.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["givenNames", "lastName", "emailAddress", "mobileNumber"]
        );
    }

    #[tokio::test]
    async fn validator_accepts_a_complete_command() {
        let failures = validator()
            .validate(&command(), &RequestContext::new())
            .await
            .expect("rules evaluate");

        assert!(failures.is_empty());
    }
}
