pub mod config_service;
pub mod json_directory_repository;
pub mod json_identity_repository;
pub mod json_session_repository;
pub mod json_store;
pub mod paths;
pub mod storage;

pub use crate::json_directory_repository::JsonDirectoryRepository;
pub use crate::json_identity_repository::JsonIdentityRepository;
pub use crate::json_session_repository::JsonSessionRepository;
pub use crate::json_store::JsonStore;
