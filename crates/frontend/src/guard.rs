//! Navigation guard
//!
//! Runs before every navigation: routes flagged as requiring
//! authentication redirect to the login route when no access token is
//! stored. Every other navigation proceeds unconditionally.

use crate::routes::{LOGIN_ROUTE, RouteMatch};
use certportal_core::credentials::CredentialStore;

/// Outcome of a guarded navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Enter the target view
    Proceed,
    /// Navigate to the named route instead
    Redirect(&'static str),
}

/// Decide whether a navigation may enter its target
///
/// A store read failure counts as no token.
pub fn check_navigation(
    target: &RouteMatch,
    credentials: &dyn CredentialStore,
) -> NavigationDecision {
    if target.route.meta.requires_auth {
        let has_token = credentials
            .access_token()
            .ok()
            .flatten()
            .is_some();
        if !has_token {
            return NavigationDecision::Redirect(LOGIN_ROUTE);
        }
    }
    NavigationDecision::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Router;
    use certportal_core::credentials::MemoryCredentialStore;

    #[test]
    fn protected_route_redirects_without_a_token() {
        let store = MemoryCredentialStore::new();
        let target = Router::new().recognize("/users/").unwrap();
        assert_eq!(
            check_navigation(&target, &store),
            NavigationDecision::Redirect(LOGIN_ROUTE)
        );
    }

    #[test]
    fn protected_route_proceeds_with_a_token() {
        let store = MemoryCredentialStore::with_pair("a1", "r1");
        let target = Router::new().recognize("/statistika/").unwrap();
        assert_eq!(check_navigation(&target, &store), NavigationDecision::Proceed);
    }

    #[test]
    fn public_route_proceeds_without_a_token() {
        let store = MemoryCredentialStore::new();
        let target = Router::new()
            .recognize("/category/organizations/banki/")
            .unwrap();
        assert_eq!(check_navigation(&target, &store), NavigationDecision::Proceed);
    }

    #[test]
    fn login_route_is_always_reachable() {
        let store = MemoryCredentialStore::new();
        let target = Router::new().recognize("/login/").unwrap();
        assert_eq!(check_navigation(&target, &store), NavigationDecision::Proceed);
    }
}
