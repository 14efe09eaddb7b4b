//! User domain types
//!
//! `User` is the wire form shared by both services. `CreateUser` and
//! `UpdateUser` are the request bodies for creation and partial update.

use super::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Disabled,
}

impl UserStatus {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Disabled => "DISABLED",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, never reused
    pub id: UserId,

    pub username: String,

    pub email: String,

    pub full_name: String,

    pub status: UserStatus,

    /// Set once at creation
    pub created_at: DateTime<Utc>,

    /// Refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a freshly created user. Status is always `Active` and both
    /// timestamps share the same instant.
    pub fn new(id: UserId, request: CreateUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: request.username,
            email: request.email,
            full_name: request.full_name,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Data for creating a new user
///
/// Any `status` sent by the caller is not part of this shape and is dropped
/// during deserialization. Missing fields are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl CreateUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
        }
    }
}

/// Partial update of a user
///
/// `None` (absent or `null` on the wire) keeps the stored value; `Some`
/// overwrites it, even with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UpdateUser {
    /// Merge the present fields into `user` and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply_to(self, user: &mut User, now: DateTime<Utc>) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
        user.updated_at = now.max(user.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_user() -> User {
        User::new(
            UserId::new(1),
            CreateUser::new("zhangsan", "zhangsan@example.com", "Zhang San"),
            Utc::now(),
        )
    }

    #[test]
    fn new_user_is_active_with_equal_timestamps() {
        let user = sample_user();
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn wire_form_uses_camel_case_and_upper_status() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["fullName"], "Zhang San");
        assert_eq!(json["status"], "ACTIVE");
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn create_request_ignores_status() {
        let req: CreateUser = serde_json::from_value(serde_json::json!({
            "username": "x",
            "email": "x@y.com",
            "fullName": "X",
            "status": "DISABLED"
        }))
        .unwrap();
        assert_eq!(req, CreateUser::new("x", "x@y.com", "X"));
    }

    #[test]
    fn update_only_touches_present_fields() {
        let mut user = sample_user();
        let before = user.clone();
        let later = before.updated_at + Duration::seconds(5);

        UpdateUser {
            username: Some("renamed".to_string()),
            ..Default::default()
        }
        .apply_to(&mut user, later);

        assert_eq!(user.username, "renamed");
        assert_eq!(user.email, before.email);
        assert_eq!(user.full_name, before.full_name);
        assert_eq!(user.status, before.status);
        assert_eq!(user.created_at, before.created_at);
        assert_eq!(user.updated_at, later);
    }

    #[test]
    fn update_with_empty_string_overwrites() {
        let mut user = sample_user();
        UpdateUser {
            full_name: Some(String::new()),
            ..Default::default()
        }
        .apply_to(&mut user, Utc::now());
        assert_eq!(user.full_name, "");
    }

    #[test]
    fn update_never_moves_updated_at_backwards() {
        let mut user = sample_user();
        let original = user.updated_at;
        UpdateUser::default().apply_to(&mut user, original - Duration::seconds(60));
        assert_eq!(user.updated_at, original);
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let req: UpdateUser = serde_json::from_value(serde_json::json!({
            "username": null,
            "status": "INACTIVE"
        }))
        .unwrap();
        assert!(req.username.is_none());
        assert_eq!(req.status, Some(UserStatus::Inactive));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: std::result::Result<UpdateUser, _> =
            serde_json::from_value(serde_json::json!({ "status": "BANNED" }));
        assert!(result.is_err());
    }

    #[test]
    fn status_displays_as_wire_name() {
        for status in [UserStatus::Active, UserStatus::Inactive, UserStatus::Disabled] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, status.to_string());
        }
    }

    #[test]
    fn create_request_missing_fields_default_to_empty() {
        let req: CreateUser = serde_json::from_value(serde_json::json!({
            "username": "x",
            "email": "x@y.com"
        }))
        .unwrap();
        assert_eq!(req, CreateUser::new("x", "x@y.com", ""));

        let empty: CreateUser = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty, CreateUser::default());
    }
}
