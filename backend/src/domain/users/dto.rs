//! Outward-facing projections of the user aggregate.
//!
//! The `From` conversions are the projection seam: pure structural
//! mappings, no I/O, no failure modes.

use serde::{Deserialize, Serialize};

use crate::domain::{ContactDetail, User};

/// Wire shape of a user record. Contact fields are flattened onto the
/// user; both are absent when no contact detail is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub given_names: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User {
            id,
            given_names,
            last_name,
            contact_detail,
        } = user;
        let (email_address, mobile_number) = match contact_detail {
            Some(contact) => (Some(contact.email_address), Some(contact.mobile_number)),
            None => (None, None),
        };
        Self {
            id,
            given_names,
            last_name,
            email_address,
            mobile_number,
        }
    }
}

/// Wire shape of the contact-detail sub-resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailDto {
    pub email_address: String,
    pub mobile_number: String,
}

impl From<ContactDetail> for ContactDetailDto {
    fn from(contact: ContactDetail) -> Self {
        Self {
            email_address: contact.email_address,
            mobile_number: contact.mobile_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::users::testing::{user, user_without_contact};
    use serde_json::Value;

    #[test]
    fn projects_the_contact_detail_onto_the_user() {
        let dto = UserDto::from(user(3));

        assert_eq!(dto.id, 3);
        assert_eq!(dto.given_names, "Ada");
        assert_eq!(dto.last_name, "Lovelace");
        assert_eq!(dto.email_address.as_deref(), Some("ada@example.com"));
        assert_eq!(dto.mobile_number.as_deref(), Some("0400000000"));
    }

    #[test]
    fn missing_contact_detail_leaves_contact_fields_absent() {
        let dto = UserDto::from(user_without_contact(4));
        let value = serde_json::to_value(&dto).expect("serializable");

        assert!(value.get("emailAddress").is_none());
        assert!(value.get("mobileNumber").is_none());
        assert_eq!(value.get("givenNames").and_then(Value::as_str), Some("Charles"));
    }

    #[test]
    fn serializes_camel_case_keys() {
        let value = serde_json::to_value(UserDto::from(user(1))).expect("serializable");

        assert!(value.get("givenNames").is_some());
        assert!(value.get("lastName").is_some());
        assert!(value.get("given_names").is_none());
    }
}
