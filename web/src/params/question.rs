use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = params::question::AskParams)]
pub(crate) struct AskParams {
    /// Free-text question asked during the meeting
    pub(crate) question: String,
    /// Client-chosen identifier grouping the questions of one meeting
    pub(crate) session_id: String,
}
