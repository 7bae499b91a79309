//! Startup-composed pipelines for every user command and query.

use std::sync::Arc;

use crate::domain::ports::UserRepository;
use crate::domain::users::{
    contact_detail, create, delete, find, get, list, update, CreateUserCommand,
    CreateUserHandler, DeleteUserCommand, DeleteUserHandler, FindUsersHandler, FindUsersQuery,
    GetContactDetailHandler, GetContactDetailQuery, GetUserHandler, GetUserQuery,
    ListUsersHandler, ListUsersQuery, UpdateUserCommand, UpdateUserHandler,
};
use crate::pipeline::{LoggingBehaviour, Pipeline, ValidationBehaviour};

/// The registry of request pipelines, built once at startup.
///
/// Each field maps one request type to its behaviour chain: logging
/// outermost, then validation with the validators registered for that
/// type, then the handler. Dispatch is a field access, no runtime
/// discovery.
pub struct UserPipelines {
    pub create: Pipeline<CreateUserCommand>,
    pub get: Pipeline<GetUserQuery>,
    pub find: Pipeline<FindUsersQuery>,
    pub list: Pipeline<ListUsersQuery>,
    pub update: Pipeline<UpdateUserCommand>,
    pub delete: Pipeline<DeleteUserCommand>,
    pub contact_detail: Pipeline<GetContactDetailQuery>,
}

impl UserPipelines {
    /// Compose every pipeline over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            create: Pipeline::new(CreateUserHandler::new(repository.clone()))
                .behaviour(LoggingBehaviour)
                .behaviour(ValidationBehaviour::single(create::validator())),
            get: Pipeline::new(GetUserHandler::new(repository.clone()))
                .behaviour(LoggingBehaviour)
                .behaviour(ValidationBehaviour::single(get::validator())),
            find: Pipeline::new(FindUsersHandler::new(repository.clone()))
                .behaviour(LoggingBehaviour)
                .behaviour(ValidationBehaviour::single(find::validator())),
            list: Pipeline::new(ListUsersHandler::new(repository.clone()))
                .behaviour(LoggingBehaviour)
                .behaviour(ValidationBehaviour::single(list::validator())),
            update: Pipeline::new(UpdateUserHandler::new(repository.clone()))
                .behaviour(LoggingBehaviour)
                .behaviour(ValidationBehaviour::single(update::validator(
                    repository.clone(),
                ))),
            delete: Pipeline::new(DeleteUserHandler::new(repository.clone()))
                .behaviour(LoggingBehaviour)
                .behaviour(ValidationBehaviour::single(delete::validator(
                    repository.clone(),
                ))),
            contact_detail: Pipeline::new(GetContactDetailHandler::new(repository))
                .behaviour(LoggingBehaviour)
                .behaviour(ValidationBehaviour::single(contact_detail::validator())),
        }
    }
}
