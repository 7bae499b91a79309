//! HTTP adapter: REST endpoints over the user pipelines.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::web;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Register every user endpoint on an API scope.
///
/// `/users/search` is registered ahead of `/users/{id}` so the literal
/// segment wins the route match.
pub fn configure_api(config: &mut web::ServiceConfig) {
    config
        .service(users::search_users)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_contact_detail)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user);
}
