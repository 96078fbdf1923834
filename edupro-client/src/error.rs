//! Client error types
//!
//! Every failure reaching a caller is one of:
//! - a transport failure ([`ClientError::Http`]),
//! - a non-OK backend response, with its parsed JSON body or a fallback body
//!   when the payload was not JSON ([`ClientError::Api`]),
//! - the end of the session after a failed token refresh
//!   ([`ClientError::SessionExpired`]).

use serde_json::{Map, Value};
use thiserror::Error;

/// Message used when the backend gives nothing displayable
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-OK status
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        body: Value,
    },

    /// Refresh token missing or refresh rejected; tokens have been cleared
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// Success response whose body does not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build an [`ClientError::Api`] from a non-OK status and its raw body
    pub fn from_response(status: u16, text: &str) -> Self {
        let body = serde_json::from_str::<Value>(text).unwrap_or_else(|_| fallback_body());
        let message = top_level_message(&body)
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self::Api {
            status,
            message,
            body,
        }
    }

    /// HTTP status of the failed response, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Parsed error body of an [`ClientError::Api`] error
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired(_))
    }

    /// Text suitable for a one-line notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { body, .. } => flatten_error_payload(body),
            Self::SessionExpired(_) => "Your session has expired, please sign in again".to_string(),
            Self::Http(e) if e.is_connect() || e.is_timeout() => {
                "Could not reach the server, check your connection".to_string()
            }
            other => other.to_string(),
        }
    }
}

fn fallback_body() -> Value {
    let mut map = Map::new();
    map.insert(
        "message".to_string(),
        Value::String(GENERIC_ERROR_MESSAGE.to_string()),
    );
    Value::Object(map)
}

fn top_level_message(body: &Value) -> Option<&str> {
    ["detail", "message"].iter().find_map(|key| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    })
}

/// Flatten a backend error payload into one human-readable string.
///
/// A top-level `detail` or `message` wins. Otherwise the payload is read as
/// a validation map (`field -> [messages]`) and rendered one field per line
/// as `field: msg1, msg2`; nested serializer errors use dotted field names.
pub fn flatten_error_payload(body: &Value) -> String {
    if let Some(message) = top_level_message(body) {
        return message.to_string();
    }

    let flattened = match body {
        Value::Object(map) => {
            let mut lines = Vec::new();
            collect_field_errors(None, map, &mut lines);
            lines.join("\n")
        }
        Value::Array(items) => join_messages(items),
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    };

    if flattened.is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        flattened
    }
}

fn collect_field_errors(prefix: Option<&str>, map: &Map<String, Value>, lines: &mut Vec<String>) {
    for (field, value) in map {
        let name = match prefix {
            Some(p) => format!("{p}.{field}"),
            None => field.clone(),
        };
        match value {
            Value::Object(inner) => collect_field_errors(Some(&name), inner, lines),
            Value::Array(items) => {
                let text = join_messages(items);
                if !text.is_empty() {
                    lines.push(format!("{name}: {text}"));
                }
                // list serializers report one error object per item
                for (idx, item) in items.iter().enumerate() {
                    if let Value::Object(inner) = item {
                        collect_field_errors(Some(&format!("{name}[{idx}]")), inner, lines);
                    }
                }
            }
            Value::Null => {}
            Value::String(s) if s.trim().is_empty() => {}
            Value::String(s) => lines.push(format!("{name}: {s}")),
            other => lines.push(format!("{name}: {other}")),
        }
    }
}

fn join_messages(items: &[Value]) -> String {
    items
        .iter()
        .filter_map(|v| match v {
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Null | Value::Object(_) => None,
            other => Some(other.to_string()),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
