//! Wire types for the user directory API.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};

/// A user record as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Some payloads omit the email; it is treated as empty.
    #[serde(default)]
    pub email: String,
    /// Avatar URL (read-only from the client's view)
    #[serde(default)]
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// One page of the user collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
    #[serde(rename = "data", default)]
    pub users: Vec<User>,
}

fn default_page() -> u32 {
    1
}

/// Editable fields sent on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserUpdate {
    /// Returns the names of fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if self.last_name.trim().is_empty() {
            missing.push("last_name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        missing
    }

    /// Rejects the update when any field is blank.
    ///
    /// # Errors
    /// Returns a `Validation` error listing the missing fields.
    pub fn validate(&self) -> ApiResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        let mut err = ApiError::validation("All fields are required");
        err.details = Some(format!("missing: {}", missing.join(", ")));
        Err(err)
    }
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// The remote echo of an update. The demo backend does not persist writes,
/// so fields are whatever it sends back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        rename = "updatedAt",
        alias = "updated_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SingleUser {
    pub data: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    #[test]
    fn test_user_page_parses_remote_shape() {
        let body = r#"{
            "page": 2, "per_page": 6, "total": 12, "total_pages": 2,
            "data": [
                {"id": 7, "email": "michael.lawson@reqres.in", "first_name": "Michael",
                 "last_name": "Lawson", "avatar": "https://reqres.in/img/faces/7-image.jpg"}
            ],
            "support": {"url": "https://reqres.in/#support-heading"}
        }"#;
        let page: UserPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].full_name(), "Michael Lawson");
    }

    #[test]
    fn test_user_missing_email_defaults_empty() {
        let user: User =
            serde_json::from_str(r#"{"id": 3, "first_name": "Emma", "last_name": "Wong"}"#)
                .unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.avatar, "");
    }

    #[test]
    fn test_missing_fields() {
        let update = UserUpdate {
            first_name: "Janet".to_string(),
            last_name: "  ".to_string(),
            email: String::new(),
        };
        assert_eq!(update.missing_fields(), vec!["last_name", "email"]);

        let err = update.validate().unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.details.as_deref(), Some("missing: last_name, email"));
    }

    #[test]
    fn test_complete_update_validates() {
        let update = UserUpdate {
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            email: "janet.weaver@reqres.in".to_string(),
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_updated_user_accepts_camel_case_timestamp() {
        let echo: UpdatedUser = serde_json::from_str(
            r#"{"first_name":"Janet","email":"j@x.io","updatedAt":"2026-10-14T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(echo.first_name.as_deref(), Some("Janet"));
        assert_eq!(echo.updated_at.as_deref(), Some("2026-10-14T10:00:00.000Z"));
    }
}
