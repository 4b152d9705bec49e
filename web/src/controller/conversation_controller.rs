use crate::response::assistant::ConversationTurnResponse;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use domain::conversation as ConversationApi;

use log::*;

/// GET every question asked in a session, oldest first
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/conversations",
    params(
        ("session_id" = String, Path, description = "Session whose history to list"),
    ),
    responses(
        (status = 200, description = "Session history, empty for unknown sessions", body = [ConversationTurnResponse]),
        (status = 500, description = "Persistent store failure")
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET conversations for session {session_id}");

    let turns = ConversationApi::find_by_session_id(app_state.db_conn_ref(), &session_id).await?;

    debug!("Found {} turns for session {session_id}", turns.len());

    Ok(Json(
        turns
            .into_iter()
            .map(ConversationTurnResponse::from)
            .collect::<Vec<_>>(),
    ))
}
