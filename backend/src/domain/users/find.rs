//! Search users by name fragments.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, UserDto};
use crate::domain::{Error, UserSearch};
use crate::pipeline::{Handle, Request, RequestContext, RuleSet};

/// Query matching users whose names contain the given fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindUsersQuery {
    pub given_names: Option<String>,
    pub last_name: Option<String>,
}

impl FindUsersQuery {
    fn has_criteria(&self) -> bool {
        let provided = |value: &Option<String>| {
            value
                .as_deref()
                .is_some_and(|value| !value.trim().is_empty())
        };
        provided(&self.given_names) || provided(&self.last_name)
    }
}

impl Request for FindUsersQuery {
    type Response = Vec<UserDto>;
    const NAME: &'static str = "FindUsersQuery";
}

pub(crate) fn validator() -> RuleSet<FindUsersQuery> {
    RuleSet::new().rule("criteria", |query: &FindUsersQuery| {
        (!query.has_criteria())
            .then(|| "at least one of givenNames or lastName must be provided".to_owned())
    })
}

/// Handler for [`FindUsersQuery`].
pub struct FindUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl FindUsersHandler {
    /// Handler over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handle<FindUsersQuery> for FindUsersHandler {
    async fn handle(
        &self,
        query: FindUsersQuery,
        cx: &RequestContext,
    ) -> Result<Vec<UserDto>, Error> {
        let criteria = UserSearch {
            given_names: query.given_names,
            last_name: query.last_name,
        };
        let users = self
            .repository
            .find(&criteria, cx)
            .await
            .map_err(map_repository_error)?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::users::testing::user;
    use crate::pipeline::Validate;
    use rstest::rstest;

    #[tokio::test]
    async fn forwards_criteria_to_the_repository() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find()
            .withf(|criteria, _cx| criteria.given_names.as_deref() == Some("Ada"))
            .times(1)
            .returning(|_, _| Ok(vec![user(1)]));

        let dtos = FindUsersHandler::new(Arc::new(repository))
            .handle(
                FindUsersQuery {
                    given_names: Some("Ada".into()),
                    last_name: None,
                },
                &RequestContext::new(),
            )
            .await
            .expect("find succeeds");

        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].given_names, "Ada");
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("".to_owned()), Some("   ".to_owned()))]
    #[tokio::test]
    async fn validator_requires_at_least_one_criterion(
        #[case] given_names: Option<String>,
        #[case] last_name: Option<String>,
    ) {
        let failures = validator()
            .validate(
                &FindUsersQuery {
                    given_names,
                    last_name,
                },
                &RequestContext::new(),
            )
            .await
            .expect("rules evaluate");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "criteria");
    }

    #[tokio::test]
    async fn validator_accepts_a_last_name_alone() {
        let failures = validator()
            .validate(
                &FindUsersQuery {
                    given_names: None,
                    last_name: Some("Lovelace".into()),
                },
                &RequestContext::new(),
            )
            .await
            .expect("rules evaluate");

        assert!(failures.is_empty());
    }
}
