//! Typed request bodies for the JSON endpoints.
//!
//! axum rejects a body that does not deserialize into these types before any handler
//! code runs, so business logic only ever sees well-formed input. Unknown fields are ignored.

pub(crate) mod question;
pub(crate) mod summary;
