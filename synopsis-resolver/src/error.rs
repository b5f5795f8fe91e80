//! Error types for the synopsis-resolver crate.
//!
//! Network, status and parse failures are recovered inside the resolution
//! engine and the synopsis extractor; only [`ResolveError::Config`] and
//! [`ResolveError::InvalidTitle`] ever reach callers of the public entry
//! points.

/// Errors that can occur while resolving a title or extracting a synopsis.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Transport-level failure (timeout, DNS, connection reset, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The remote answered with a non-success status code.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Failed to parse a response document.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid resolver configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The title cannot be resolved at all (e.g. blank).
    #[error("invalid title: {0}")]
    InvalidTitle(String),
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Http(err.to_string()),
        }
    }
}

/// Convenience type alias for synopsis-resolver results.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = ResolveError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_status() {
        let err = ResolveError::Status(404);
        assert_eq!(err.to_string(), "HTTP status 404");
    }

    #[test]
    fn display_parse() {
        let err = ResolveError::Parse("unexpected HTML structure".into());
        assert_eq!(err.to_string(), "parse error: unexpected HTML structure");
    }

    #[test]
    fn display_config() {
        let err = ResolveError::Config("search_timeout_seconds must be > 0".into());
        assert_eq!(
            err.to_string(),
            "config error: search_timeout_seconds must be > 0"
        );
    }

    #[test]
    fn display_invalid_title() {
        let err = ResolveError::InvalidTitle("title is empty".into());
        assert_eq!(err.to_string(), "invalid title: title is empty");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolveError>();
    }
}
