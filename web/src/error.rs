use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{DomainErrorKind, Error as DomainError};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.0)
    }
}

// Every failure leaves the service as `{"detail": "..."}`. Only caller mistakes get a 4xx;
// store and upstream failures are reported as a generic server error carrying their message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        let status = match self.0.error_kind {
            DomainErrorKind::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainErrorKind::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            DomainErrorKind::Internal(_) | DomainErrorKind::External(_) => {
                error!("Request failed: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
