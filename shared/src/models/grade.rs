//! Grade Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grade of a student in a classroom subject for one term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    /// Student reference
    pub student: i64,
    /// ClassroomSubject reference
    pub classroom_subject: i64,
    /// Term number within the school year (1-based)
    pub term: u8,
    pub value: Decimal,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub subject_name: Option<String>,
}

/// Create grade payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeCreate {
    pub student: i64,
    pub classroom_subject: i64,
    pub term: u8,
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Update grade payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
