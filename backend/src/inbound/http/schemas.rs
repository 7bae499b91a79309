//! OpenAPI schema wrappers.
//!
//! Doc-only shapes mirroring the wire types, so domain and DTO modules
//! stay free of utoipa derives.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Wire shape of a user record.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSchema {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada")]
    pub given_names: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email_address: Option<String>,
    #[schema(example = "0400000000")]
    pub mobile_number: Option<String>,
}

/// Wire shape of the contact-detail sub-resource.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailSchema {
    pub email_address: String,
    pub mobile_number: String,
}

/// One page of users.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPageSchema {
    pub data: Vec<UserSchema>,
    pub has_next_page: bool,
}

/// Uniform error envelope.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    pub code: String,
    #[schema(example = "The user '5' could not be found.")]
    pub message: String,
    pub details: Option<Value>,
    pub trace_id: Option<String>,
}
