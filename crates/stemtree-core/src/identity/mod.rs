//! Identity domain module.
//!
//! Contains the authenticated identity model and its persistence trait.

pub mod model;
pub mod repository;

pub use model::{AccountStatus, Identity, Role};
pub use repository::IdentityRepository;
