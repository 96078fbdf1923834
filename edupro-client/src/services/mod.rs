//! Typed services, one per backend area
//!
//! The collection accessors are thin: `client.students().list(&query)` is
//! exactly `GET /academic/students/?...`. Extension traits are implemented
//! for every [`HttpClient`](crate::HttpClient), so tests can run them
//! against a double.

mod academic;
mod auth;
mod communication;
mod dashboard;
mod financial;
mod users;

pub use academic::{
    AcademicApi, LearningContentUpload, CLASSROOMS_PATH, CLASSROOM_SUBJECTS_PATH, GRADES_PATH,
    LEARNING_CONTENTS_PATH, STUDENTS_PATH, SUBJECTS_PATH, TEACHERS_PATH,
};
pub use auth::{LOGIN_PATH, ME_PATH};
pub use communication::{CommunicationApi, EVENTS_PATH, NOTICES_PATH};
pub use dashboard::{DashboardApi, DASHBOARD_STATS_PATH};
pub use financial::{FinancialApi, FEES_PATH, FEE_SUMMARY_PATH};
pub use users::{UsersApi, USERS_PATH};
