//! The user aggregate and its nested contact detail.

use serde::{Deserialize, Serialize};

/// Contact information attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    pub email_address: String,
    pub mobile_number: String,
}

impl ContactDetail {
    /// Build a contact detail from its parts.
    pub fn new(email_address: impl Into<String>, mobile_number: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            mobile_number: mobile_number.into(),
        }
    }
}

/// A stored user record.
///
/// Identifiers are assigned by the repository on insertion; handlers never
/// mutate persisted state except through repository calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub given_names: String,
    pub last_name: String,
    pub contact_detail: Option<ContactDetail>,
}

impl User {
    /// Ensure a contact detail is present, default-initializing one if
    /// absent, and return it for mutation.
    pub fn contact_detail_mut(&mut self) -> &mut ContactDetail {
        self.contact_detail.get_or_insert_with(ContactDetail::default)
    }
}

/// The id-less shape handed to the repository for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub given_names: String,
    pub last_name: String,
    pub contact_detail: Option<ContactDetail>,
}

/// Search criteria for [`crate::domain::ports::UserRepository::find`].
///
/// A user matches when any provided criterion is contained in the
/// corresponding field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    pub given_names: Option<String>,
    pub last_name: Option<String>,
}
