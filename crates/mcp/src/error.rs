// Dispatcher error taxonomy. Validation variants are raised before any
// upstream request is made.

use runn_core::aggregate::MalformedRecord;
use runn_sdk::RunnError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The invocation named a tool the registry does not contain.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    /// A required argument was absent (or null).
    #[error("missing required argument `{name}`")]
    MissingArgument { name: &'static str },

    /// An argument was present but had the wrong type or shape.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The upstream call failed; surfaced to the caller verbatim.
    #[error(transparent)]
    Upstream(#[from] RunnError),

    /// Strict-mode aggregation refused a malformed record.
    #[error("aggregation failed: {0}")]
    Aggregation(#[from] MalformedRecord),

    /// A tool result failed to serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DispatchError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
