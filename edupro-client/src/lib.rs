//! EduPro Client - HTTP client for the EduPro Connect backend
//!
//! Provides the authenticated REST client (bearer token, refresh-on-401,
//! error normalization), cookie-style session token storage, the route
//! guard, and one typed service per backend resource.

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod resource;
pub mod services;
pub mod session;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{flatten_error_payload, ClientError, ClientResult, GENERIC_ERROR_MESSAGE};
pub use guard::{GuardDecision, RouteGuard, DASHBOARD_PATH};
pub use http::{ApiRequest, FilePart, HttpClient, MultipartForm, RequestBody};
pub use resource::Resource;
pub use services::{AcademicApi, CommunicationApi, DashboardApi, FinancialApi, UsersApi};
pub use session::{
    FileTokenStore, LogNavigator, MemoryTokenStore, Navigator, TokenStore, ROOT_PATH,
};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, TokenPair};
pub use shared::{ListQuery, Page};
