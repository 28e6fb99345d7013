//! Small envelopes shared by several endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic `{"message": "..."}` body.
///
/// Every error response uses this shape, as do the endpoints that have
/// nothing better to report than an acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    /// Build a message body from any string-like value.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
