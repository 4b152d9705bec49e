use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = params::summary::SummaryParams)]
pub(crate) struct SummaryParams {
    pub(crate) session_id: String,
    /// Human-readable meeting length, stored as given (ex. "25 minutes")
    pub(crate) duration: String,
}
