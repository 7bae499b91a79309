//! OpenAPI documentation for the REST API.
//!
//! The generated document is served at `/api-docs/openapi.json` for
//! external tooling; no UI is bundled.

use actix_web::{get, web};
use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ContactDetailSchema, ErrorSchema, UserPageSchema, UserSchema,
};
use crate::inbound::http::users::UserPayload;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "CRUD access to user records and their contact details."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::search_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::get_contact_detail,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ContactDetailSchema,
        UserPageSchema,
        ErrorSchema,
        UserPayload,
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_document_lists_every_user_operation() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/api/v1/users"));
        assert!(paths.contains(&"/api/v1/users/search"));
        assert!(paths.contains(&"/api/v1/users/{id}"));
        assert!(paths.contains(&"/api/v1/users/{id}/contact-detail"));
        assert!(paths.contains(&"/health/ready"));
    }
}
