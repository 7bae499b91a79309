//! Contact-detail sub-resource read.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::users::{map_repository_error, user_not_found, ContactDetailDto};
use crate::domain::Error;
use crate::pipeline::rules::greater_than_zero;
use crate::pipeline::{Handle, Request, RequestContext, RuleSet};

/// Query for the contact detail stored under a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetContactDetailQuery {
    pub user_id: i64,
}

impl Request for GetContactDetailQuery {
    type Response = ContactDetailDto;
    const NAME: &'static str = "GetContactDetailQuery";
}

pub(crate) fn validator() -> RuleSet<GetContactDetailQuery> {
    RuleSet::new().rule("userId", |query: &GetContactDetailQuery| {
        greater_than_zero("userId", query.user_id)
    })
}

/// Handler for [`GetContactDetailQuery`].
pub struct GetContactDetailHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetContactDetailHandler {
    /// Handler over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Handle<GetContactDetailQuery> for GetContactDetailHandler {
    async fn handle(
        &self,
        query: GetContactDetailQuery,
        cx: &RequestContext,
    ) -> Result<ContactDetailDto, Error> {
        let user = self
            .repository
            .get(query.user_id, cx)
            .await
            .map_err(map_repository_error)?;
        let user = user.ok_or_else(|| user_not_found(query.user_id))?;
        let contact = user.contact_detail.ok_or_else(|| {
            Error::not_found(format!(
                "The user '{}' has no contact detail.",
                query.user_id
            ))
        })?;
        Ok(ContactDetailDto::from(contact))
    }
}
