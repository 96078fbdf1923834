// edupro-client/src/session/cookie.rs
// Auth-token cookies with expiry

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
/// Both cookies are scoped to the whole site
pub const COOKIE_PATH: &str = "/";
pub const ACCESS_TOKEN_TTL_DAYS: i64 = 1;
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// A single named cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub expires_at: DateTime<Utc>,
}

impl Cookie {
    pub fn new(name: &str, value: &str, max_age: Duration, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            path: COOKIE_PATH.to_string(),
            expires_at: now + max_age,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// The pair of auth cookies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookies {
    #[serde(default)]
    pub access: Option<Cookie>,
    #[serde(default)]
    pub refresh: Option<Cookie>,
}

impl SessionCookies {
    pub fn access_token(&self, now: DateTime<Utc>) -> Option<String> {
        live_value(self.access.as_ref(), now)
    }

    pub fn refresh_token(&self, now: DateTime<Utc>) -> Option<String> {
        live_value(self.refresh.as_ref(), now)
    }

    pub fn set_access(&mut self, token: &str, now: DateTime<Utc>) {
        self.access = Some(Cookie::new(
            ACCESS_TOKEN_COOKIE,
            token,
            Duration::days(ACCESS_TOKEN_TTL_DAYS),
            now,
        ));
    }

    pub fn set_refresh(&mut self, token: &str, now: DateTime<Utc>) {
        self.refresh = Some(Cookie::new(
            REFRESH_TOKEN_COOKIE,
            token,
            Duration::days(REFRESH_TOKEN_TTL_DAYS),
            now,
        ));
    }

    /// Drop cookies that have expired
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        if self.access.as_ref().is_some_and(|c| c.is_expired_at(now)) {
            self.access = None;
        }
        if self.refresh.as_ref().is_some_and(|c| c.is_expired_at(now)) {
            self.refresh = None;
        }
    }

    pub fn clear(&mut self) {
        self.access = None;
        self.refresh = None;
    }

    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none()
    }
}

fn live_value(cookie: Option<&Cookie>, now: DateTime<Utc>) -> Option<String> {
    cookie
        .filter(|c| !c.is_expired_at(now) && !c.value.is_empty())
        .map(|c| c.value.clone())
}
