//! Auth DTOs shared by the client and the console
//!
//! Request/response bodies of `/auth/login/`, `/auth/refresh/` and `/auth/me/`.

use serde::{Deserialize, Serialize};

use crate::models::User;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: both tokens plus the user when the backend includes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response
///
/// `refresh` is only present when the backend rotates refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

/// Token pair handed back to callers after a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl From<&LoginResponse> for TokenPair {
    fn from(resp: &LoginResponse) -> Self {
        Self {
            access: resp.access.clone(),
            refresh: resp.refresh.clone(),
        }
    }
}
