//! Role-based routing policy.
//!
//! Decides, for a current identity (or absence of one) and a requested
//! route, whether to render the route or redirect elsewhere. This is a pure
//! function of `(identity, requested route)` with no side effects, so the
//! whole policy is testable as a lookup table.

use crate::identity::{Identity, Role};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The routes the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Route {
    /// Login page; the only route reachable without an identity.
    Login,
    /// Regular user dashboard.
    Dashboard,
    /// Center admin dashboard.
    Admin,
    /// Platform superadmin dashboard.
    Superadmin,
}

impl Route {
    /// The URL path this route is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Admin => "/admin",
            Route::Superadmin => "/superadmin",
        }
    }

    /// Resolves a URL path to a route.
    ///
    /// Unknown paths resolve to `Login`, mirroring the catch-all redirect of
    /// the navigation layer.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/dashboard" => Route::Dashboard,
            "/admin" => Route::Admin,
            "/superadmin" => Route::Superadmin,
            _ => Route::Login,
        }
    }

    /// The roles permitted to render this route.
    ///
    /// `Login` is open to everyone; an authenticated request for it is
    /// handled separately by [`resolve`].
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Route::Login => &[Role::User, Role::Admin, Role::Superadmin],
            Route::Dashboard => &[Role::User],
            Route::Admin => &[Role::Admin, Role::Superadmin],
            Route::Superadmin => &[Role::Superadmin],
        }
    }
}

impl Role {
    /// The dashboard route this role lands on after login or a denied
    /// request.
    pub fn home_route(&self) -> Route {
        match self {
            Role::User => Route::Dashboard,
            Role::Admin => Route::Admin,
            Role::Superadmin => Route::Superadmin,
        }
    }
}

/// The outcome of a routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route.
    Render(Route),
    /// Redirect to the login route (no identity present).
    RedirectToLogin,
    /// Redirect to another route (role not permitted, or already logged in).
    Redirect(Route),
}

/// Decides what to do with a request for `requested` given the current
/// identity.
///
/// - No identity and a protected route: redirect to login.
/// - An identity requesting `Login`: redirect to the role's home route.
/// - An identity whose role is not in the route's allowed set: redirect to
///   the role's home route, never the requested route.
/// - Otherwise: render.
pub fn resolve(identity: Option<&Identity>, requested: Route) -> RouteDecision {
    let Some(identity) = identity else {
        return match requested {
            Route::Login => RouteDecision::Render(Route::Login),
            _ => RouteDecision::RedirectToLogin,
        };
    };

    if requested == Route::Login {
        return RouteDecision::Redirect(identity.role.home_route());
    }

    if requested.allowed_roles().contains(&identity.role) {
        RouteDecision::Render(requested)
    } else {
        RouteDecision::Redirect(identity.role.home_route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn identity_with(role: Role) -> Identity {
        Identity::fabricate("someone@example.com", role)
    }

    #[test]
    fn test_unauthenticated_protected_routes_redirect_to_login() {
        for route in [Route::Dashboard, Route::Admin, Route::Superadmin] {
            assert_eq!(resolve(None, route), RouteDecision::RedirectToLogin);
        }
    }

    #[test]
    fn test_unauthenticated_login_renders() {
        assert_eq!(resolve(None, Route::Login), RouteDecision::Render(Route::Login));
    }

    #[test]
    fn test_authenticated_login_redirects_home() {
        for role in Role::iter() {
            let identity = identity_with(role);
            assert_eq!(
                resolve(Some(&identity), Route::Login),
                RouteDecision::Redirect(role.home_route())
            );
        }
    }

    #[test]
    fn test_denied_roles_redirect_to_own_home_never_requested() {
        for role in Role::iter() {
            for route in Route::iter() {
                if route == Route::Login || route.allowed_roles().contains(&role) {
                    continue;
                }
                let identity = identity_with(role);
                let decision = resolve(Some(&identity), route);
                assert_eq!(decision, RouteDecision::Redirect(role.home_route()));
                assert_ne!(decision, RouteDecision::Render(route));
            }
        }
    }

    #[test]
    fn test_allowed_roles_render() {
        let admin = identity_with(Role::Admin);
        assert_eq!(
            resolve(Some(&admin), Route::Admin),
            RouteDecision::Render(Route::Admin)
        );

        // Superadmins may also render the admin dashboard
        let superadmin = identity_with(Role::Superadmin);
        assert_eq!(
            resolve(Some(&superadmin), Route::Admin),
            RouteDecision::Render(Route::Admin)
        );
        assert_eq!(
            resolve(Some(&superadmin), Route::Superadmin),
            RouteDecision::Render(Route::Superadmin)
        );
    }

    #[test]
    fn test_path_round_trip() {
        assert_eq!(Route::from_path("/admin"), Route::Admin);
        assert_eq!(Route::from_path(Route::Dashboard.path()), Route::Dashboard);
        assert_eq!(Route::from_path("/does-not-exist"), Route::Login);
    }
}
