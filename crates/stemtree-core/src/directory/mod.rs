//! Directory domain module.
//!
//! Flat records backing the admin and superadmin dashboards: user tables,
//! the document list, the activity log, and the settings panels. All of
//! them are manipulated through whole-list replace-on-write.

pub mod model;
pub mod repository;

pub use model::{
    ActivityKind, ActivityLogEntry, Document, LlmModel, PlatformSettings, Theme, UserSettings,
};
pub use repository::{DirectoryRepository, UserScope};
