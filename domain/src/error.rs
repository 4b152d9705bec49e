//! Error types for the `domain` layer.
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use meeting_ai::Error as MeetingAiError;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. `web` only ever sees this type, never `entity_api` or `meeting_ai`
/// errors, and uses the `error_kind` to pick a status code.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
    /// Caller supplied input that can't be processed
    Validation(String),
    /// Caller supplied more data than the service accepts
    PayloadTooLarge(String),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Entity(EntityErrorKind),
    Config,
    Io,
    Other(String),
}

/// Store errors translated from `entity_api` and reduced to what callers act on.
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Other(String),
}

/// Enum representing the various kinds of errors raised by external services.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network,
    Authentication,
    RateLimited,
    Other(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Validation(message.into()),
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::PayloadTooLarge(message.into()),
        }
    }

    fn describe_kind(&self) -> String {
        match &self.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound)) => {
                "record not found".to_string()
            }
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Other(_))) => {
                "persistent store error".to_string()
            }
            DomainErrorKind::Internal(InternalErrorKind::Config) => "configuration error".to_string(),
            DomainErrorKind::Internal(InternalErrorKind::Io) => "local I/O error".to_string(),
            DomainErrorKind::Internal(InternalErrorKind::Other(msg)) => msg.clone(),
            DomainErrorKind::External(ExternalErrorKind::Network) => {
                "upstream service unreachable".to_string()
            }
            DomainErrorKind::External(ExternalErrorKind::Authentication) => {
                "upstream service rejected credentials".to_string()
            }
            DomainErrorKind::External(ExternalErrorKind::RateLimited) => {
                "upstream service rate limit exceeded".to_string()
            }
            DomainErrorKind::External(ExternalErrorKind::Other(msg)) => msg.clone(),
            DomainErrorKind::Validation(msg) | DomainErrorKind::PayloadTooLarge(msg) => {
                msg.clone()
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.describe_kind(), source),
            None => write!(f, "{}", self.describe_kind()),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `entity_api` layer to the `domain` layer.
impl From<EntityApiError> for Error {
    fn from(err: EntityApiError) -> Self {
        let entity_error_kind = match err.error_kind {
            EntityApiErrorKind::RecordNotFound => EntityErrorKind::NotFound,
            _ => EntityErrorKind::Other("EntityErrorKind".to_string()),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(entity_error_kind)),
        }
    }
}

impl From<MeetingAiError> for Error {
    fn from(err: MeetingAiError) -> Self {
        let error_kind = match &err {
            MeetingAiError::Network(_) => DomainErrorKind::External(ExternalErrorKind::Network),
            MeetingAiError::Authentication(_) => {
                DomainErrorKind::External(ExternalErrorKind::Authentication)
            }
            MeetingAiError::RateLimited { .. } => {
                DomainErrorKind::External(ExternalErrorKind::RateLimited)
            }
            MeetingAiError::Provider(_) => DomainErrorKind::External(ExternalErrorKind::Other(
                "upstream service error".to_string(),
            )),
            MeetingAiError::Deserialization(_) | MeetingAiError::EmptyResponse => {
                DomainErrorKind::External(ExternalErrorKind::Other(
                    "invalid upstream response".to_string(),
                ))
            }
            MeetingAiError::Io(_) => DomainErrorKind::Internal(InternalErrorKind::Io),
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance. This
        // type of error will occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to build reqwest client".to_string(),
                )),
            }
        // Errors that result from issues with the network call itself.
        } else {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Io),
        }
    }
}
