pub mod app;
pub mod auth_service;
pub mod chat_usecase;
pub mod directory_usecase;

pub use app::AppContext;
pub use auth_service::AuthService;
pub use chat_usecase::{ChatUseCase, SentMessage};
pub use directory_usecase::DirectoryUseCase;
