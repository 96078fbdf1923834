//! Login, current user, logout
//!
//! These live on the concrete [`ApiClient`] because they own the session
//! tokens.

use shared::client::{LoginRequest, LoginResponse, TokenPair};
use shared::models::User;

use crate::client::ApiClient;
use crate::http::{ApiRequest, HttpClient};
use crate::session::ROOT_PATH;
use crate::{ClientError, ClientResult};

pub const LOGIN_PATH: &str = "/auth/login/";
pub const ME_PATH: &str = "/auth/me/";

impl ApiClient {
    /// Login with username and password, storing both tokens
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenPair> {
        let request = ApiRequest::post(LOGIN_PATH)
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })?
            .anonymous();

        let resp: LoginResponse = self.request(request).await?;
        if resp.access.is_empty() || resp.refresh.is_empty() {
            return Err(ClientError::InvalidResponse("Missing login tokens".into()));
        }

        self.tokens().set_tokens(&resp.access, &resp.refresh);
        tracing::info!(username, "logged in");
        Ok(TokenPair::from(&resp))
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<User> {
        self.get(ME_PATH).await
    }

    /// Drop the session and go back to the landing page
    pub fn logout(&self) {
        self.tokens().clear();
        self.navigator().navigate(ROOT_PATH);
        tracing::info!("logged out");
    }
}
