//! Protected route list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted after login and logout: when the user is sitting on a protected
//! path, the flows send them home instead of leaving a page whose access
//! rules just changed.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use std::sync::LazyLock;

use regex::RegexSet;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Anchored patterns matched against the location path.
pub const PROTECTED_ROUTE_PATTERNS: &[&str] = &["^/login$", "^/user(/|$)", "^/admin(/|$)", "^/create-shop$"];

static PROTECTED_ROUTES: LazyLock<RouteGuard> =
    LazyLock::new(|| RouteGuard::new(PROTECTED_ROUTE_PATTERNS).expect("protected route patterns compile"));

/// Immutable set of path patterns.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    patterns: RegexSet,
}

impl RouteGuard {
    /// Compile a pattern list.
    ///
    /// # Errors
    ///
    /// Returns the regex error for the first pattern that fails to compile.
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self { patterns: RegexSet::new(patterns)? })
    }

    /// The storefront's protected route list.
    #[must_use]
    pub fn protected() -> &'static Self {
        &PROTECTED_ROUTES
    }

    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.patterns.is_match(strip_query(path))
    }
}

/// Whether `path` is one of the storefront's protected routes.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    RouteGuard::protected().is_protected(path)
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
