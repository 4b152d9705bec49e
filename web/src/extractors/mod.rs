//! Request extractors whose rejections use the service's `{"detail": ..}` error body.

use crate::Error;
use axum::http::StatusCode;
use domain::error::Error as DomainError;
use log::*;

pub(crate) mod json_body;
pub(crate) mod upload_form;

/// Maps an axum rejection to a domain error: 413 stays 413, every other rejection is a 422.
pub(crate) fn rejected(status: StatusCode, detail: String) -> Error {
    warn!("Rejecting request ({status}): {detail}");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        Error::from(DomainError::payload_too_large(detail))
    } else {
        Error::from(DomainError::validation(detail))
    }
}
