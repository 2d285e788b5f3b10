//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The host has no drawing surface to hand out
    #[error("Drawing surface not available")]
    SurfaceUnavailable,

    /// The surface exists but a 2D drawing context could not be obtained
    #[error("2D drawing context not available: {0}")]
    ContextUnavailable(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlatformError::SurfaceUnavailable.to_string(),
            "Drawing surface not available"
        );
        assert_eq!(
            PlatformError::ContextUnavailable("webgl only".into()).to_string(),
            "2D drawing context not available: webgl only"
        );
    }
}
