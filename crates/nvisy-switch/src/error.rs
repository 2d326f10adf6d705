//! Switch error types.

use thiserror::Error;

/// Result type for switch configuration operations.
pub type SwitchResult<T> = Result<T, SwitchError>;

/// Errors that can occur while building, loading or validating a routing
/// configuration.
///
/// Routing itself never fails: malformed data and operands degrade to
/// non-matches instead of surfacing here.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// Routing configuration failed schema validation.
    #[error("invalid routing configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    /// A builder was finalized with a required field unset.
    #[error("incomplete definition: {0}")]
    Incomplete(#[from] derive_builder::UninitializedFieldError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
