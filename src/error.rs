//! Error types for the growth step.

use thiserror::Error;

/// Errors raised while building kernel parameters or running a step.
///
/// Both kinds are deterministic validation failures. Nothing is retried or
/// silently corrected; the caller decides whether to abort or rebuild.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeniaError {
    /// Invalid or out-of-domain configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Array dimensions disagree with the configured kernels/channels
    #[error("shape mismatch in {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

impl LeniaError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type alias for growth operations.
pub type Result<T> = std::result::Result<T, LeniaError>;
