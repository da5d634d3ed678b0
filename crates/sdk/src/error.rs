//! Error types for the Runn SDK.

use serde_json::Value;

/// Result type for SDK operations.
pub type RunnResult<T> = Result<T, RunnError>;

/// Error types that can occur when talking to the upstream API.
#[derive(Debug, thiserror::Error)]
pub enum RunnError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status; the body is carried verbatim.
    #[error("upstream error (status {status}): {body}")]
    Upstream { status: u16, body: Value },

    /// The pagination safety bound tripped before the cursor ran out.
    #[error("pagination limit exceeded after {pages} pages")]
    PaginationLimitExceeded { pages: u32 },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RunnError {
    /// Build an upstream error from a status code and response body,
    /// keeping the body as JSON when it parses and as a string otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        Self::Upstream { status, body }
    }

    /// The HTTP status of an upstream error, if this is one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
