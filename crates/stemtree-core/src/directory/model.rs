//! Flat records for the management dashboards.
//!
//! These are display/table rows with no referential integrity between them;
//! collections are always replaced wholesale. Seed values match what the
//! dashboards show on a first load with empty storage.

use crate::identity::{AccountStatus, Identity, Role};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A document available to the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document identifier (UUID format)
    pub id: String,
    /// File name
    pub name: String,
    /// Subject category (e.g. "Physics")
    pub category: String,
    /// File type label (e.g. "PDF")
    #[serde(rename = "type")]
    pub kind: String,
    /// Size in bytes
    pub size: u64,
    /// Email of the uploader
    pub uploaded_by: String,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Download URL
    pub url: String,
}

/// What kind of action an activity log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActivityKind {
    Create,
    Edit,
    Delete,
    Upload,
    Login,
}

/// One row of the platform activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    /// Unique entry identifier (UUID format)
    pub id: String,
    /// Short action label (e.g. "User Created")
    pub action: String,
    /// Email of the actor
    pub actor: String,
    /// Human-readable description
    pub description: String,
    /// When the action happened
    pub timestamp: DateTime<Utc>,
    /// Action category
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

impl ActivityLogEntry {
    /// Creates an entry with a fresh UUID and the current timestamp.
    pub fn record(
        action: impl Into<String>,
        actor: impl Into<String>,
        description: impl Into<String>,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            action: action.into(),
            actor: actor.into(),
            description: description.into(),
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// The language model the platform is configured to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LlmModel {
    #[default]
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "claude")]
    Claude,
    #[serde(rename = "gemini")]
    Gemini,
}

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Platform-wide settings, editable by superadmins only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    /// Whether multilingual support is enabled
    pub multilingual: bool,
    /// Maximum upload size in megabytes
    #[serde(rename = "maxFileSize")]
    pub max_file_size_mb: u32,
    /// Selected language model
    pub llm_model: LlmModel,
    /// Default UI theme
    pub default_theme: Theme,
    /// Whether self-registration is open
    pub allow_registration: bool,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            multilingual: true,
            max_file_size_mb: 50,
            llm_model: LlmModel::Gpt4,
            default_theme: Theme::Light,
            allow_registration: true,
        }
    }
}

/// Per-user preferences, editable from the user dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub name: String,
    pub nickname: String,
    /// Display name of the assistant in the chat header
    pub chatbot_name: String,
    pub theme: Theme,
    /// BCP 47 language tag
    pub language: String,
    pub notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            nickname: "Johnny".to_string(),
            chatbot_name: "STEM Assistant".to_string(),
            theme: Theme::Light,
            language: "en".to_string(),
            notifications: true,
        }
    }
}

fn seed_user(
    id: &str,
    email: &str,
    name: &str,
    role: Role,
    created_at: DateTime<Utc>,
    center: &str,
) -> Identity {
    Identity {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        nickname: None,
        role,
        status: AccountStatus::Active,
        created_at,
        last_login: None,
        center: Some(center.to_string()),
    }
}

/// Seed rows for the admin dashboard's user table.
pub fn seed_admin_users() -> Vec<Identity> {
    vec![
        seed_user(
            "7f6ec04a-9be1-4c73-9c3e-61a2c2bd0001",
            "student1@example.com",
            "Alice Johnson",
            Role::User,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            "Center A",
        ),
        seed_user(
            "7f6ec04a-9be1-4c73-9c3e-61a2c2bd0002",
            "student2@example.com",
            "Bob Smith",
            Role::User,
            Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
            "Center B",
        ),
    ]
}

/// Seed rows for the superadmin dashboard's admin table.
pub fn seed_superadmin_users() -> Vec<Identity> {
    vec![
        seed_user(
            "3a1d27e8-55cf-4f6a-8d2b-94f1c7aa0001",
            "admin1@stemtree.com",
            "John Admin",
            Role::Admin,
            Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
            "Center A",
        ),
        seed_user(
            "3a1d27e8-55cf-4f6a-8d2b-94f1c7aa0002",
            "admin2@stemtree.com",
            "Jane Admin",
            Role::Admin,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            "Center B",
        ),
    ]
}

/// Seed rows for the admin dashboard's document table.
pub fn seed_documents() -> Vec<Document> {
    vec![Document {
        id: "c28b4f0d-2e8a-4f9b-b7c4-5582d3fe0001".to_string(),
        name: "Physics_Chapter_5.pdf".to_string(),
        category: "Physics".to_string(),
        kind: "PDF".to_string(),
        size: 2_048_000,
        uploaded_by: "admin@stemtree.com".to_string(),
        uploaded_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
        url: "#".to_string(),
    }]
}
