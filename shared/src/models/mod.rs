//! Data models
//!
//! Mirrors of the backend resources. All IDs are `i64`; foreign keys are
//! plain IDs, optionally accompanied by a denormalized display name the
//! backend adds to list responses.
//!
//! Each writable resource has a `*Create` payload (POST) and an `*Update`
//! payload (PATCH) whose `None` fields are omitted from the request body.

pub mod classroom;
pub mod dashboard;
pub mod event;
pub mod fee;
pub mod grade;
pub mod learning_content;
pub mod notice;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;

// Re-exports
pub use classroom::*;
pub use dashboard::*;
pub use event::*;
pub use fee::*;
pub use grade::*;
pub use learning_content::*;
pub use notice::*;
pub use student::*;
pub use subject::*;
pub use teacher::*;
pub use user::*;
