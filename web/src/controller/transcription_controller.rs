//! Speech-to-text for audio captured during a meeting.

use crate::response::assistant::TranscriptResponse;
use crate::extractors::rejected;
use crate::extractors::upload_form::UploadForm;
use crate::{AppState, Error};

use axum::extract::multipart::MultipartError;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use domain::error::Error as DomainError;
use domain::transcription as TranscriptionApi;
use log::*;

/// POST /transcribe
///
/// Multipart form with an `audio` file part (WAV) and a `session_id` text part.
/// The transcript is returned only; it is not added to the session's history.
#[utoipa::path(
    post,
    path = "/transcribe",
    request_body(content_type = "multipart/form-data", description = "`audio` file part and `session_id` text part"),
    responses(
        (status = 200, description = "Audio transcribed", body = TranscriptResponse),
        (status = 413, description = "Upload larger than the configured limit"),
        (status = 422, description = "Missing or malformed form field"),
        (status = 500, description = "Transcription service failure")
    )
)]
pub async fn transcribe(
    State(app_state): State<AppState>,
    UploadForm(mut multipart): UploadForm,
) -> Result<impl IntoResponse, Error> {
    let mut audio = None;
    let mut session_id = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("audio") => audio = Some(field.bytes().await.map_err(invalid_upload)?),
            Some("session_id") => session_id = Some(field.text().await.map_err(invalid_upload)?),
            Some(other) => debug!("Ignoring unexpected form field {other}"),
            None => debug!("Ignoring unnamed form field"),
        }
    }

    let audio = audio.ok_or_else(|| DomainError::validation("missing `audio` form field"))?;
    let session_id =
        session_id.ok_or_else(|| DomainError::validation("missing `session_id` form field"))?;

    debug!(
        "POST transcribe {} bytes of audio for session {session_id}",
        audio.len()
    );

    let transcript = TranscriptionApi::transcribe(app_state.transcription_provider(), &audio).await?;

    info!(
        "Transcribed {} characters for session {session_id}",
        transcript.text.len()
    );

    Ok(Json(TranscriptResponse::from(transcript)))
}

fn invalid_upload(e: MultipartError) -> Error {
    rejected(e.status(), e.body_text())
}
