//! User commands, queries, and their pipelines.
//!
//! Each submodule bundles one request type with its validator rule set and
//! handler, mirroring one operation of the service. [`UserPipelines`] wires
//! them all into dispatchable pipelines at startup.

mod contact_detail;
mod create;
mod delete;
mod dto;
mod find;
mod get;
mod list;
mod pipelines;
mod rules;
mod update;

pub use contact_detail::{GetContactDetailHandler, GetContactDetailQuery};
pub use create::{CreateUserCommand, CreateUserHandler};
pub use delete::{DeleteUserCommand, DeleteUserHandler};
pub use dto::{ContactDetailDto, UserDto};
pub use find::{FindUsersHandler, FindUsersQuery};
pub use get::{GetUserHandler, GetUserQuery};
pub use list::{ListUsersHandler, ListUsersQuery, DEFAULT_ITEMS_PER_PAGE};
pub use pipelines::UserPipelines;
pub use rules::UserExists;
pub use update::{UpdateUserCommand, UpdateUserHandler};

use serde_json::json;

use crate::domain::ports::UserPersistenceError;
use crate::domain::Error;

/// Map a port error onto the domain taxonomy at the handler seam.
pub(crate) fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository query failed: {message}"))
        }
        UserPersistenceError::Cancelled => {
            Error::cancelled("request cancelled during a repository call")
        }
    }
}

/// The uniform not-found error for a missing user id.
pub(crate) fn user_not_found(id: i64) -> Error {
    Error::not_found(format!("The user '{id}' could not be found.")).with_details(json!({
        "id": id,
    }))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fixtures shared by the command and query tests.

    use crate::domain::{ContactDetail, User};

    /// A stored user with a contact detail.
    pub fn user(id: i64) -> User {
        User {
            id,
            given_names: "Ada".into(),
            last_name: "Lovelace".into(),
            contact_detail: Some(ContactDetail::new("ada@example.com", "0400000000")),
        }
    }

    /// A stored user without a contact detail.
    pub fn user_without_contact(id: i64) -> User {
        User {
            id,
            given_names: "Charles".into(),
            last_name: "Babbage".into(),
            contact_detail: None,
        }
    }
}
