//! Paginated user listing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, UserDto};
use crate::domain::{Error, Paginated};
use crate::pipeline::rules::greater_than_zero;
use crate::pipeline::{Handle, Request, RequestContext, RuleSet};

/// Default page size when the caller does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 10;

/// Query for one 1-indexed page of users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUsersQuery {
    pub page_number: i64,
    pub items_per_page: i64,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            page_number: 0,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Request for ListUsersQuery {
    type Response = Paginated<UserDto>;
    const NAME: &'static str = "ListUsersQuery";
}

pub(crate) fn validator() -> RuleSet<ListUsersQuery> {
    RuleSet::new()
        .rule("pageNumber", |query: &ListUsersQuery| {
            greater_than_zero("pageNumber", query.page_number)
        })
        .rule("itemsPerPage", |query: &ListUsersQuery| {
            greater_than_zero("itemsPerPage", query.items_per_page)
        })
}

/// Handler for [`ListUsersQuery`].
pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    /// Handler over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handle<ListUsersQuery> for ListUsersHandler {
    async fn handle(
        &self,
        query: ListUsersQuery,
        cx: &RequestContext,
    ) -> Result<Paginated<UserDto>, Error> {
        let total = self
            .repository
            .count(cx)
            .await
            .map_err(map_repository_error)?;
        let users = self
            .repository
            .paginate(query.page_number, query.items_per_page, cx)
            .await
            .map_err(map_repository_error)?;
        let data = users.into_iter().map(UserDto::from).collect();
        Ok(Paginated::new(
            data,
            query.page_number,
            query.items_per_page,
            total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::users::testing::user;
    use crate::pipeline::Validate;
    use rstest::rstest;

    fn repository_with(total: i64, page_len: usize) -> MockUserRepository {
        let mut repository = MockUserRepository::new();
        repository
            .expect_count()
            .times(1)
            .returning(move |_| Ok(total));
        repository
            .expect_paginate()
            .times(1)
            .returning(move |page, _size, _| {
                Ok((0..page_len)
                    .map(|offset| user(page * 100 + offset as i64))
                    .collect())
            });
        repository
    }

    #[rstest]
    #[case(1, true)]
    #[case(2, true)]
    #[case(3, false)]
    #[tokio::test]
    async fn has_next_page_follows_the_page_count(
        #[case] page_number: i64,
        #[case] expected: bool,
    ) {
        let handler = ListUsersHandler::new(Arc::new(repository_with(25, 10)));

        let page = handler
            .handle(
                ListUsersQuery {
                    page_number,
                    items_per_page: 10,
                },
                &RequestContext::new(),
            )
            .await
            .expect("list succeeds");

        assert_eq!(page.has_next_page, expected);
    }

    #[tokio::test]
    async fn projects_each_user_on_the_page() {
        let handler = ListUsersHandler::new(Arc::new(repository_with(3, 3)));

        let page = handler
            .handle(
                ListUsersQuery {
                    page_number: 1,
                    items_per_page: 10,
                },
                &RequestContext::new(),
            )
            .await
            .expect("list succeeds");

        assert_eq!(page.data.len(), 3);
        assert!(!page.has_next_page);
        assert_eq!(page.data[0].last_name, "Lovelace");
    }

    #[rstest]
    #[case(0)]
    #[case(-2)]
    #[tokio::test]
    async fn validator_rejects_non_positive_page_numbers(#[case] page_number: i64) {
        let failures = validator()
            .validate(
                &ListUsersQuery {
                    page_number,
                    items_per_page: 10,
                },
                &RequestContext::new(),
            )
            .await
            .expect("rules evaluate");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "pageNumber");
        assert_eq!(failures[0].message, "pageNumber must be greater than 0");
    }

    #[tokio::test]
    async fn validator_rejects_a_zero_page_size() {
        let failures = validator()
            .validate(
                &ListUsersQuery {
                    page_number: 1,
                    items_per_page: 0,
                },
                &RequestContext::new(),
            )
            .await
            .expect("rules evaluate");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "itemsPerPage");
    }
}
