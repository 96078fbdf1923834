//! Classroom Model

use serde::{Deserialize, Serialize};

/// School shift a classroom runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
    FullTime,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::FullTime => "full_time",
        }
    }
}

/// Classroom (class of a given school year)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub shift: Option<Shift>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub student_count: Option<u32>,
}

/// Create classroom payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomCreate {
    pub name: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<Shift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// Update classroom payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassroomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<Shift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// Subject taught to a classroom by a teacher in a given year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomSubject {
    pub id: i64,
    pub classroom: i64,
    pub subject: i64,
    #[serde(default)]
    pub teacher: Option<i64>,
    pub year: i32,
    #[serde(default)]
    pub classroom_name: Option<String>,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
}

/// Create classroom-subject payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomSubjectCreate {
    pub classroom: i64,
    pub subject: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<i64>,
    pub year: i32,
}

/// Update classroom-subject payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassroomSubjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}
