//! User endpoints.
//!
//! ```text
//! POST   /api/v1/users
//! GET    /api/v1/users
//! GET    /api/v1/users/search
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}
//! DELETE /api/v1/users/{id}
//! GET    /api/v1/users/{id}/contact-detail
//! ```
//!
//! Handlers only translate between the wire and request values; every
//! business rule lives behind the pipelines.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::users::{
    ContactDetailDto, CreateUserCommand, DeleteUserCommand, FindUsersQuery,
    GetContactDetailQuery, GetUserQuery, ListUsersQuery, UpdateUserCommand, UserDto,
    DEFAULT_ITEMS_PER_PAGE,
};
use crate::domain::Paginated;
use crate::inbound::http::schemas::{ContactDetailSchema, ErrorSchema, UserPageSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;
use crate::pipeline::RequestContext;

/// Request body shared by create and update.
///
/// Absent fields deserialize to empty strings so the validation pipeline
/// reports them field by field instead of the JSON layer rejecting the
/// body wholesale.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    #[schema(example = "Ada")]
    pub given_names: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email_address: String,
    #[schema(example = "0400000000")]
    pub mobile_number: String,
}

/// Query parameters for the paginated listing.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    /// 1-indexed page to fetch.
    pub page_number: Option<i64>,
    /// Page size; defaults to 10.
    pub items_per_page: Option<i64>,
}

/// Query parameters for the name search.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersParams {
    pub given_names: Option<String>,
    pub last_name: Option<String>,
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Created user", body = UserSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let cx = RequestContext::new();
    let UserPayload {
        given_names,
        last_name,
        email_address,
        mobile_number,
    } = payload.into_inner();
    let command = CreateUserCommand {
        given_names,
        last_name,
        email_address,
        mobile_number,
    };
    let user = state.users.create.send(command, &cx).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List users page by page.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users", body = UserPageSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    params: web::Query<ListUsersParams>,
) -> ApiResult<web::Json<Paginated<UserDto>>> {
    let cx = RequestContext::new();
    let query = ListUsersQuery {
        page_number: params.page_number.unwrap_or(0),
        items_per_page: params.items_per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
    };
    let page = state.users.list.send(query, &cx).await?;
    Ok(web::Json(page))
}

/// Search users by name fragments.
#[utoipa::path(
    get,
    path = "/api/v1/users/search",
    params(SearchUsersParams),
    responses(
        (status = 200, description = "Matching users", body = [UserSchema]),
        (status = 400, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "searchUsers"
)]
#[get("/users/search")]
pub async fn search_users(
    state: web::Data<HttpState>,
    params: web::Query<SearchUsersParams>,
) -> ApiResult<web::Json<Vec<UserDto>>> {
    let cx = RequestContext::new();
    let params = params.into_inner();
    let query = FindUsersQuery {
        given_names: params.given_names,
        last_name: params.last_name,
    };
    let users = state.users.find.send(query, &cx).await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserDto>> {
    let cx = RequestContext::new();
    let user = state
        .users
        .get
        .send(GetUserQuery { id: path.into_inner() }, &cx)
        .await?;
    Ok(web::Json(user))
}

/// Replace a user's names and contact fields.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserDto>> {
    let cx = RequestContext::new();
    let UserPayload {
        given_names,
        last_name,
        email_address,
        mobile_number,
    } = payload.into_inner();
    let command = UpdateUserCommand {
        id: path.into_inner(),
        given_names,
        last_name,
        email_address,
        mobile_number,
    };
    let user = state.users.update.send(command, &cx).await?;
    Ok(web::Json(user))
}

/// Delete a user, returning the former state.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The removed user", body = UserSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserDto>> {
    let cx = RequestContext::new();
    let user = state
        .users
        .delete
        .send(DeleteUserCommand { id: path.into_inner() }, &cx)
        .await?;
    Ok(web::Json(user))
}

/// Fetch the contact-detail sub-resource of a user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/contact-detail",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The contact detail", body = ContactDetailSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such user or contact detail", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getContactDetail"
)]
#[get("/users/{id}/contact-detail")]
pub async fn get_contact_detail(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ContactDetailDto>> {
    let cx = RequestContext::new();
    let contact = state
        .users
        .contact_detail
        .send(
            GetContactDetailQuery {
                user_id: path.into_inner(),
            },
            &cx,
        )
        .await?;
    Ok(web::Json(contact))
}
