//! Error types for meeting AI operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// Provider implementations map their native errors to these variants so callers can
/// decide how to react (surface, degrade, log) without knowing which vendor is behind
/// the trait.
#[derive(Debug)]
pub enum Error {
    /// API key rejected or lacking permissions.
    Authentication(String),

    /// Connection failures, DNS errors, timeouts talking to the provider.
    Network(String),

    /// Non-success response from the provider, carrying the provider's message.
    Provider(String),

    /// Provider rate limit exceeded.
    RateLimited { retry_after_seconds: u64 },

    /// Response body did not match the declared schema.
    Deserialization(String),

    /// Response was well-formed but carried no usable content.
    EmptyResponse,

    /// Local I/O while preparing a request (ex. reading an audio file).
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::RateLimited {
                retry_after_seconds,
            } => {
                write!(f, "Rate limited: retry after {}s", retry_after_seconds)
            }
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::EmptyResponse => write!(f, "Provider returned an empty response"),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
