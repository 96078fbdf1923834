//! Authenticated API client
//!
//! One request goes through at most two sends:
//!
//! 1. send with the stored access token;
//! 2. on 401, refresh the access token once through `/auth/refresh/` and
//!    send again with the new token, returning whatever that second send
//!    yields.
//!
//! If the refresh cannot happen (no refresh token, transport error, non-OK
//! answer) the session ends: both tokens are cleared, the navigator is sent
//! to `/` and the call fails with [`ClientError::SessionExpired`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shared::client::{RefreshRequest, RefreshResponse};

use crate::http::{decode_body, ApiRequest, HttpClient, RequestBody};
use crate::session::{FileTokenStore, LogNavigator, MemoryTokenStore, Navigator, TokenStore, ROOT_PATH};
use crate::{ClientConfig, ClientError, ClientResult};

/// Token refresh endpoint
pub const REFRESH_PATH: &str = "/auth/refresh/";

/// HTTP client for the EduPro backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.tokens.access_token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// Tokens live in memory unless `session_file` is set.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let tokens: Arc<dyn TokenStore> = match &config.session_file {
            Some(path) => Arc::new(FileTokenStore::open(path)),
            None => Arc::new(MemoryTokenStore::new()),
        };

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            navigator: Arc::new(LogNavigator),
        })
    }

    /// Replace the token store
    pub fn with_token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Replace the navigator invoked when the session ends
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token store backing this client
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Whether a live access token is stored
    pub fn is_authenticated(&self) -> bool {
        self.tokens.access_token().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> ClientResult<reqwest::Response> {
        let mut req = self.http.request(request.method.clone(), self.url(&request.path));
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req = match &request.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(value),
            RequestBody::Multipart(form) => req.multipart(form.to_form()?),
        };

        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        Ok(req.send().await?)
    }

    /// Exchange the refresh token for a new access token, or end the session
    async fn refresh_access_token(&self) -> ClientResult<String> {
        let Some(refresh) = self.tokens.refresh_token() else {
            return Err(self.end_session("no refresh token available"));
        };

        match self.call_refresh(&refresh).await {
            Ok(resp) => {
                self.tokens.set_access_token(&resp.access);
                if let Some(rotated) = &resp.refresh {
                    self.tokens.set_refresh_token(rotated);
                }
                tracing::info!("access token refreshed");
                Ok(resp.access)
            }
            Err(e) => {
                tracing::debug!(error = %e, "token refresh failed");
                Err(self.end_session("token refresh failed"))
            }
        }
    }

    async fn call_refresh(&self, refresh: &str) -> ClientResult<RefreshResponse> {
        let request = ApiRequest::post(REFRESH_PATH)
            .json(&RefreshRequest {
                refresh: refresh.to_string(),
            })?
            .anonymous();
        let response = self.send(&request, None).await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &text));
        }
        let resp: RefreshResponse = decode_body(&text)?;
        if resp.access.is_empty() {
            return Err(ClientError::InvalidResponse("refresh returned an empty access token".into()));
        }
        Ok(resp)
    }

    /// Clear the session and navigate home
    pub(crate) fn end_session(&self, reason: &str) -> ClientError {
        tracing::warn!(reason, "ending session");
        self.tokens.clear();
        self.navigator.navigate(ROOT_PATH);
        ClientError::SessionExpired(reason.to_string())
    }

    /// Turn a response into `T` or a normalized error
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let err = ClientError::from_response(status.as_u16(), &text);
            tracing::debug!(status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }
        decode_body(&text)
    }
}

#[async_trait]
impl HttpClient for ApiClient {
    async fn request<T: DeserializeOwned + Send>(&self, request: ApiRequest) -> ClientResult<T> {
        if request.anonymous {
            let response = self.send(&request, None).await?;
            return self.handle_response(response).await;
        }

        let token = self.tokens.access_token();
        let response = self.send(&request, token.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return self.handle_response(response).await;
        }

        tracing::debug!(path = %request.path, "access token rejected, refreshing");
        let fresh = self.refresh_access_token().await?;
        let retried = self.send(&request, Some(&fresh)).await?;
        self.handle_response(retried).await
    }
}
