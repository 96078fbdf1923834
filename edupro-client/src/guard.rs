//! Route guard
//!
//! Decides, per requested path, whether a visitor may proceed. Signed-out
//! visitors are kept out of the protected areas; signed-in visitors are
//! sent past the landing and signup pages.

use crate::session::{TokenStore, ROOT_PATH};

/// Where signed-in users land
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SIGNUP_PATH: &str = "/signup";

/// Path prefixes that require a session
pub const DEFAULT_PROTECTED_PREFIXES: &[&str] = &[
    "/dashboard",
    "/students",
    "/teachers",
    "/classes",
    "/subjects",
    "/grades",
    "/financial",
    "/calendar",
    "/notices",
    "/users",
    "/settings",
];

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Request-level gate over console paths
#[derive(Debug, Clone)]
pub struct RouteGuard {
    protected: Vec<String>,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_PREFIXES.iter().copied())
    }
}

impl RouteGuard {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected: prefixes
                .into_iter()
                .map(|p| p.into().trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Whether `path` falls under a protected prefix
    pub fn is_protected(&self, path: &str) -> bool {
        let path = strip_query(path);
        self.protected.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    pub fn decide(&self, path: &str, authenticated: bool) -> GuardDecision {
        let bare = strip_query(path);
        let bare = if bare.len() > 1 {
            bare.trim_end_matches('/')
        } else {
            bare
        };

        if !authenticated && self.is_protected(bare) {
            return GuardDecision::Redirect(ROOT_PATH.to_string());
        }
        if authenticated && (bare == ROOT_PATH || bare == SIGNUP_PATH) {
            return GuardDecision::Redirect(DASHBOARD_PATH.to_string());
        }
        GuardDecision::Allow
    }

    /// Decide using the access-token cookie of `tokens`
    pub fn check(&self, path: &str, tokens: &dyn TokenStore) -> GuardDecision {
        self.decide(path, tokens.access_token().is_some())
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
