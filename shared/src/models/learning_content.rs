//! Learning Content Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of learning content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    File,
    Link,
}

/// File or external link attached to a classroom subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningContent {
    pub id: i64,
    /// ClassroomSubject reference
    pub classroom_subject: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub content_type: ContentType,
    /// Download URL when `content_type` is `file`
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create payload for link contents (file contents go through multipart)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningContentCreate {
    pub classroom_subject: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Update learning content payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningContentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
