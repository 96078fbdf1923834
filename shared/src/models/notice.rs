//! Notice Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audience segment a notice is published to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeAudience {
    #[default]
    All,
    Students,
    Teachers,
    Guardians,
}

impl NoticeAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Students => "students",
            Self::Teachers => "teachers",
            Self::Guardians => "guardians",
        }
    }
}

/// Published announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub audience: NoticeAudience,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Author (User reference)
    #[serde(default)]
    pub author: Option<i64>,
}

/// Create notice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeCreate {
    pub title: String,
    pub content: String,
    pub audience: NoticeAudience,
    #[serde(default)]
    pub is_published: bool,
}

/// Update notice payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<NoticeAudience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}
