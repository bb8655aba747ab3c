//! Authentication service.
//!
//! Owns the authenticated identity: mock login, logout, and rehydration
//! from durable storage on startup. No real verification happens anywhere;
//! the artificial delay stands in for a backend round trip.

use std::sync::Arc;
use std::time::Duration;
use stemtree_core::error::Result;
use stemtree_core::identity::{Identity, IdentityRepository, Role};
use stemtree_core::routing::{Route, RouteDecision, resolve};
use tokio::sync::Mutex;

/// Service owning the current authenticated identity.
///
/// The identity is cached in memory and mirrored to durable storage on
/// every login, so it survives process restarts. No other component may
/// mutate it; readers get clones via [`AuthService::current_identity`].
pub struct AuthService {
    /// Repository for the persisted identity blob
    identity_repository: Arc<dyn IdentityRepository>,
    /// Cached identity; `None` means logged out
    identity: Mutex<Option<Identity>>,
    /// Artificial delay standing in for a backend call
    login_delay: Duration,
}

impl AuthService {
    /// Creates the service and rehydrates the identity from storage.
    ///
    /// A corrupted persisted blob rehydrates as logged-out; it is never an
    /// error.
    pub async fn new(
        identity_repository: Arc<dyn IdentityRepository>,
        login_delay: Duration,
    ) -> Result<Self> {
        let identity = identity_repository.load().await?;
        if let Some(identity) = &identity {
            tracing::debug!(email = %identity.email, role = %identity.role, "rehydrated identity");
        }
        Ok(Self {
            identity_repository,
            identity: Mutex::new(identity),
            login_delay,
        })
    }

    /// Logs in with the default role (`User`).
    ///
    /// See [`AuthService::login_as`].
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        self.login_as(email, password, Role::User).await
    }

    /// Mock login: accepts any non-empty email/password pair.
    ///
    /// Returns `Ok(false)` without any state change when either credential
    /// is empty; this is the only validation failure and it is reported as
    /// a boolean, not an error. Otherwise sleeps the configured delay,
    /// fabricates an [`Identity`] for the given role, persists it
    /// (overwriting any previous login), and returns `Ok(true)`.
    pub async fn login_as(&self, email: &str, password: &str, role: Role) -> Result<bool> {
        if email.is_empty() || password.is_empty() {
            return Ok(false);
        }

        // Simulated backend round trip
        tokio::time::sleep(self.login_delay).await;

        let identity = Identity::fabricate(email, role);
        self.identity_repository.save(&identity).await?;
        *self.identity.lock().await = Some(identity);
        tracing::debug!(email, %role, "logged in");
        Ok(true)
    }

    /// Clears the identity, in memory and in storage.
    pub async fn logout(&self) -> Result<()> {
        *self.identity.lock().await = None;
        self.identity_repository.clear().await
    }

    /// Returns the cached identity, or `None` when logged out.
    pub async fn current_identity(&self) -> Option<Identity> {
        self.identity.lock().await.clone()
    }

    /// Routes a request against the current identity.
    ///
    /// Convenience over [`stemtree_core::routing::resolve`].
    pub async fn route(&self, requested: Route) -> RouteDecision {
        let identity = self.identity.lock().await;
        resolve(identity.as_ref(), requested)
    }
}
