//! Client routes and the session guard.

use std::fmt;

use crate::session::SessionStore;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Users,
    EditUser(u64),
}

impl Route {
    /// Parses a client path. `/` and unknown paths resolve to `/login`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/users" | "users" => Route::Users,
            _ => trimmed
                .strip_prefix("/edit-user/")
                .or_else(|| trimmed.strip_prefix("edit-user/"))
                .and_then(|id| id.parse::<u64>().ok())
                .map_or(Route::Login, Route::EditUser),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Users => "/users".to_string(),
            Route::EditUser(id) => format!("/edit-user/{id}"),
        }
    }

    /// Protected routes require a session token.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Resolves where a navigation to `route` actually lands.
///
/// A protected route without a stored token redirects to `Route::Login`.
/// Token validity is not checked here.
pub fn guard(route: Route, session: &dyn SessionStore) -> Route {
    if route.is_protected() && !session.is_logged_in() {
        tracing::debug!(requested = %route, "no session token, redirecting to /login");
        Route::Login
    } else {
        route
    }
}

/// The landing route on startup: the user list when a token exists.
pub fn initial_route(session: &dyn SessionStore) -> Route {
    guard(Route::Users, session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/users"), Route::Users);
        assert_eq!(Route::parse("/users/"), Route::Users);
        assert_eq!(Route::parse("/edit-user/2"), Route::EditUser(2));
    }

    #[test]
    fn test_root_and_unknown_redirect_to_login() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse(""), Route::Login);
        assert_eq!(Route::parse("/settings"), Route::Login);
        assert_eq!(Route::parse("/edit-user/abc"), Route::Login);
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [Route::Login, Route::Users, Route::EditUser(7)] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_guard_redirects_without_token() {
        let session = MemorySessionStore::new();
        assert_eq!(guard(Route::Users, &session), Route::Login);
        assert_eq!(guard(Route::EditUser(2), &session), Route::Login);
        assert_eq!(guard(Route::Login, &session), Route::Login);
    }

    #[test]
    fn test_guard_allows_with_token() {
        let session = MemorySessionStore::with_token("token");
        assert_eq!(guard(Route::Users, &session), Route::Users);
        assert_eq!(guard(Route::EditUser(2), &session), Route::EditUser(2));
    }

    #[test]
    fn test_logout_then_protected_visit_redirects() {
        let session = MemorySessionStore::with_token("token");
        assert_eq!(initial_route(&session), Route::Users);

        session.clear().unwrap();
        assert_eq!(guard(Route::Users, &session), Route::Login);
    }
}
