//! Error types for the surface code pipeline.

use thiserror::Error;

/// Result type for surface code operations.
pub type Result<T> = std::result::Result<T, SurfaceCodeError>;

/// Errors raised before any pipeline stage runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceCodeError {
    /// A simulation parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl SurfaceCodeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SurfaceCodeError::InvalidParameter(msg.into())
    }
}
