use thiserror::Error;

/// Result type alias for siaga-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the Siaga assistant
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider errors (transport, malformed responses, server failures)
    #[error("provider error: {0}")]
    Provider(String),

    /// Provider refused the request because the quota was exhausted (HTTP 429)
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Provider rejected the credentials (HTTP 401/403)
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err: Error = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));
        assert_eq!(io_err.to_string(), "I/O error: file not found");

        let config_err: Error = Error::Config("missing api key".to_string());
        assert_eq!(config_err.to_string(), "configuration error: missing api key");

        let provider_err: Error = Error::Provider("endpoint unreachable".to_string());
        assert_eq!(provider_err.to_string(), "provider error: endpoint unreachable");

        let rate_err: Error = Error::RateLimited("quota exhausted".to_string());
        assert_eq!(rate_err.to_string(), "rate limited: quota exhausted");

        let auth_err: Error = Error::Unauthorized("bad key".to_string());
        assert_eq!(auth_err.to_string(), "authentication failed: bad key");

        let parse_err: Error = Error::Parse("invalid JSON".to_string());
        assert_eq!(parse_err.to_string(), "parse error: invalid JSON");

        let other_err: Error = Error::Other("something went wrong".to_string());
        assert_eq!(other_err.to_string(), "something went wrong");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_err.into();
        assert_eq!(error.to_string(), "I/O error: denied");
    }

    #[test]
    fn test_result_type_alias() {
        let ok: Result<i32> = Ok(42);
        assert!(ok.is_ok());

        let err: Result<i32> = Err(Error::Other("error".to_string()));
        assert!(err.is_err());
    }
}
