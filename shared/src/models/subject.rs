//! Subject Model

use serde::{Deserialize, Serialize};

/// Subject (discipline)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Yearly workload in hours
    #[serde(default)]
    pub workload_hours: Option<u32>,
}

/// Create subject payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_hours: Option<u32>,
}

/// Update subject payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_hours: Option<u32>,
}
