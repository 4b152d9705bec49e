use crate::params::summary::SummaryParams;
use crate::response::assistant::SummaryResponse;
use crate::extractors::json_body::JsonBody;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::meeting_summary as MeetingSummaryApi;

use log::*;

/// POST generate and store a summary of a session's questions and answers
#[utoipa::path(
    post,
    path = "/summary",
    request_body = SummaryParams,
    responses(
        (status = 200, description = "Summary generated, or a notice that the session is empty", body = SummaryResponse),
        (status = 422, description = "Malformed or incomplete request body"),
        (status = 500, description = "Persistent store or language model failure")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    JsonBody(params): JsonBody<SummaryParams>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST summary for session {} ({})",
        params.session_id, params.duration
    );

    let summary = MeetingSummaryApi::summarize(
        app_state.db_conn_ref(),
        app_state.completion_provider(),
        &params.session_id,
        &params.duration,
    )
    .await?;

    Ok(Json(SummaryResponse { summary }))
}
