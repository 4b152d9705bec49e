use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct RootResponse {
    pub(crate) message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct HealthResponse {
    pub(crate) status: String,
    /// RFC 3339 time at which the check was answered
    #[schema(value_type = String, format = DateTime)]
    pub(crate) timestamp: DateTime<Utc>,
}
