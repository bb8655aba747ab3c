//! Identity domain model.
//!
//! This module contains the authenticated identity record and the role
//! taxonomy used for all access decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The role of an authenticated identity.
///
/// Determines which dashboard and sections are reachable. Serialized in
/// lowercase to match the persisted storage layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Regular user; lands on the chat dashboard.
    #[default]
    User,
    /// Center administrator; manages users and documents.
    Admin,
    /// Platform superadmin; manages admins and platform settings.
    Superadmin,
}

/// Whether an account is currently usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

/// The authenticated user record.
///
/// Created on login (mocked), overwritten on each login, destroyed on
/// logout. Owned exclusively by the auth service; no other component may
/// mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Login email address
    pub email: String,
    /// Display name derived from the email local part
    pub name: String,
    /// Optional display nickname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Role used for access decisions
    pub role: Role,
    /// Account status
    pub status: AccountStatus,
    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Center the account belongs to ("Global" for superadmins)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
}

impl Identity {
    /// Fabricates a mock identity for the given credentials and role.
    ///
    /// The display name is the email local part with its first letter
    /// upper-cased, mirroring what a real account provisioning step would
    /// fill in. Superadmins belong to the "Global" center, everyone else to
    /// "Center A".
    pub fn fabricate(email: &str, role: Role) -> Self {
        let now = Utc::now();
        let local_part = email.split('@').next().unwrap_or(email);
        let mut chars = local_part.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => local_part.to_string(),
        };
        let center = match role {
            Role::Superadmin => "Global",
            _ => "Center A",
        };

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            name,
            nickname: None,
            role,
            status: AccountStatus::Active,
            created_at: now,
            last_login: Some(now),
            center: Some(center.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabricate_derives_name_from_email() {
        let identity = Identity::fabricate("alice@example.com", Role::User);
        assert_eq!(identity.name, "Alice");
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.status, AccountStatus::Active);
        assert_eq!(identity.center.as_deref(), Some("Center A"));
        assert!(identity.last_login.is_some());
    }

    #[test]
    fn test_fabricate_superadmin_center_is_global() {
        let identity = Identity::fabricate("root@stemtree.com", Role::Superadmin);
        assert_eq!(identity.center.as_deref(), Some("Global"));
    }

    #[test]
    fn test_fabricate_ids_are_unique() {
        let a = Identity::fabricate("a@x.com", Role::User);
        let b = Identity::fabricate("a@x.com", Role::User);
        assert_ne!(a.id, b.id);
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Superadmin).unwrap(), "\"superadmin\"");
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }
}
