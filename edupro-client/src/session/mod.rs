//! Session state: auth-token cookies and post-logout navigation
//!
//! The two token cookies are the only state the console persists. Stores
//! are read and written synchronously around each request.

mod cookie;
mod store;

pub use cookie::{
    Cookie, SessionCookies, ACCESS_TOKEN_COOKIE, ACCESS_TOKEN_TTL_DAYS, COOKIE_PATH,
    REFRESH_TOKEN_COOKIE, REFRESH_TOKEN_TTL_DAYS,
};
pub use store::{FileTokenStore, MemoryTokenStore};

/// Landing path for signed-out users
pub const ROOT_PATH: &str = "/";

/// Token storage
pub trait TokenStore: Send + Sync {
    /// Live access token, if any
    fn access_token(&self) -> Option<String>;

    /// Live refresh token, if any
    fn refresh_token(&self) -> Option<String>;

    fn set_access_token(&self, token: &str);

    fn set_refresh_token(&self, token: &str);

    /// Store both tokens after a login
    fn set_tokens(&self, access: &str, refresh: &str) {
        self.set_access_token(access);
        self.set_refresh_token(refresh);
    }

    /// Remove both tokens
    fn clear(&self);
}

/// Client-side navigation triggered when the session ends
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator for headless use: records the redirect in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::warn!(path, "session ended, redirecting");
    }
}
