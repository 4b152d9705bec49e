use crate::params::question::AskParams;
use crate::response::assistant::AnswerResponse;
use crate::extractors::json_body::JsonBody;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::question as QuestionApi;

use log::*;

/// POST a question asked during a meeting.
///
/// The answer comes from the FAQ table when a stored question contains the asked text,
/// otherwise from the language model. Either way the exchange is added to the session's history.
#[utoipa::path(
    post,
    path = "/ask",
    request_body = AskParams,
    responses(
        (status = 200, description = "Question answered", body = AnswerResponse),
        (status = 422, description = "Malformed or incomplete request body"),
        (status = 500, description = "Persistent store failure")
    )
)]
pub async fn ask(
    State(app_state): State<AppState>,
    JsonBody(params): JsonBody<AskParams>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST ask for session {}: {:?}",
        params.session_id, params.question
    );

    let answer = QuestionApi::answer(
        app_state.db_conn_ref(),
        app_state.completion_provider(),
        &params.session_id,
        &params.question,
    )
    .await?;

    info!(
        "Answered question for session {} from {}",
        params.session_id, answer.source
    );

    Ok(Json(AnswerResponse::from(answer)))
}
