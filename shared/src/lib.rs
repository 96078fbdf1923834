//! Shared types for EduPro Connect
//!
//! Entity shapes mirrored from the EduPro REST backend, the pagination
//! envelope used by every list endpoint, and the auth DTOs exchanged with
//! `/auth/*`. The backend owns all of these; the client only decodes them.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use response::{ListQuery, Page};
pub use serde::{Deserialize, Serialize};
