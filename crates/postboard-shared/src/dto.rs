//! Data Transfer Objects - request parameters and response bodies for the API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query for routes that address one post: `?id=`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostIdQuery {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,
}

/// Query for creating a post: `?content=`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPostQuery {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// Query for editing a post: `?id=&content=`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditPostQuery {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// A post as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub content: String,
    pub likes: i64,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub created: String,
    pub removed: bool,
}

impl PostResponse {
    pub fn new(id: i64, content: String, likes: i64, created: DateTime<Utc>, removed: bool) -> Self {
        Self {
            id,
            content,
            likes,
            created: created.to_rfc3339_opts(SecondsFormat::Millis, true),
            removed,
        }
    }
}

/// Service liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Which post store is active: `mysql` or `memory`.
    pub storage: String,
    pub timestamp: String,
}
