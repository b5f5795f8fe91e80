//! Error types for the manga-synopsis service.

use synopsis_resolver::ResolveError;

/// Top-level error type for the synopsis service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server bind or serve error.
    #[error("server error: {0}")]
    Server(String),

    /// Resolution engine error (invalid config or title).
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = ServiceError::Config("expected a table".into());
        assert_eq!(err.to_string(), "config error: expected a table");
    }

    #[test]
    fn resolve_error_is_transparent() {
        let err = ServiceError::from(ResolveError::InvalidTitle("title is empty".into()));
        assert_eq!(err.to_string(), "invalid title: title is empty");
    }

    #[test]
    fn io_error_converts() {
        let err = ServiceError::from(std::io::Error::other("disk gone"));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
