//! Fetch a single user by identifier.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, user_not_found, UserDto};
use crate::domain::Error;
use crate::pipeline::rules::greater_than_zero;
use crate::pipeline::{Handle, Request, RequestContext, RuleSet};

/// Query for one user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserQuery {
    pub id: i64,
}

impl Request for GetUserQuery {
    type Response = UserDto;
    const NAME: &'static str = "GetUserQuery";
}

pub(crate) fn validator() -> RuleSet<GetUserQuery> {
    RuleSet::new().rule("id", |query: &GetUserQuery| {
        greater_than_zero("id", query.id)
    })
}

/// Handler for [`GetUserQuery`].
pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    /// Handler over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handle<GetUserQuery> for GetUserHandler {
    async fn handle(&self, query: GetUserQuery, cx: &RequestContext) -> Result<UserDto, Error> {
        let user = self
            .repository
            .get(query.id, cx)
            .await
            .map_err(map_repository_error)?;
        let user = user.ok_or_else(|| user_not_found(query.id))?;
        Ok(UserDto::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::users::testing::user;
    use crate::domain::ErrorCode;
    use crate::pipeline::Validate;

    #[tokio::test]
    async fn projects_the_stored_user() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_get()
            .withf(|id, _cx| *id == 2)
            .times(1)
            .returning(|_, _| Ok(Some(user(2))));

        let dto = GetUserHandler::new(Arc::new(repository))
            .handle(GetUserQuery { id: 2 }, &RequestContext::new())
            .await
            .expect("get succeeds");

        assert_eq!(dto.id, 2);
        assert_eq!(dto.email_address.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn missing_users_are_not_found() {
        let mut repository = MockUserRepository::new();
        repository.expect_get().times(1).returning(|_, _| Ok(None));

        let error = GetUserHandler::new(Arc::new(repository))
            .handle(GetUserQuery { id: 9 }, &RequestContext::new())
            .await
            .expect_err("missing user");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "The user '9' could not be found.");
    }

    #[tokio::test]
    async fn validator_rejects_non_positive_ids() {
        let failures = validator()
            .validate(&GetUserQuery { id: -1 }, &RequestContext::new())
            .await
            .expect("rules evaluate");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message, "id must be greater than 0");
    }
}
