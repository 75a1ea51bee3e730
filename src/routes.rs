//! Route table and the guard deciding what a navigation renders.

use crate::session::Session;
use std::fmt;

/// Views the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/",
            Route::NotFound => "/404",
        }
    }

    /// Resolves a request path. Query strings and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/register" => Route::Register,
            _ => Route::NotFound,
        }
    }

    /// Whether the route requires a session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of evaluating a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn target(&self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => *route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirect(_))
    }
}

/// Admits protected routes only when the session carries a token.
pub struct RouteGuard;

impl RouteGuard {
    /// Where unauthenticated visitors of a protected route are sent.
    pub const LOGIN_REDIRECT: Route = Route::Login;

    pub fn evaluate(route: Route, session: &Session) -> Navigation {
        if route.is_protected() && session.token().is_none() {
            tracing::debug!(route = %route, "Redirecting unauthenticated navigation");
            Navigation::Redirect(Self::LOGIN_REDIRECT)
        } else {
            Navigation::Render(route)
        }
    }

    pub fn evaluate_path(path: &str, session: &Session) -> Navigation {
        Self::evaluate(Route::from_path(path), session)
    }
}
