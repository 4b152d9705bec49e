//! Speech-to-text for uploaded meeting audio.

use crate::error::Error;
use log::*;
use meeting_ai::traits::transcription;
use meeting_ai::Transcription;
use serde::Serialize;
use std::path::Path;

const DEFAULT_CONFIDENCE: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub text: String,
    pub confidence: f64,
}

/// Transcribes `audio` (expected to be WAV) through a temporary file that is removed before
/// this returns, whether or not transcription succeeded. Nothing is recorded in the
/// session's conversation history.
pub async fn transcribe(
    transcription_provider: &dyn transcription::Provider,
    audio: &[u8],
) -> Result<Transcript, Error> {
    let temp_file = tempfile::Builder::new()
        .prefix("meeting-audio-")
        .suffix(".wav")
        .tempfile()?;
    debug!(
        "Buffered {} bytes of audio at {} for {}",
        audio.len(),
        temp_file.path().display(),
        transcription_provider.provider_id()
    );

    let outcome = transcribe_file(transcription_provider, temp_file.path(), audio).await;
    let cleanup = temp_file.close();

    let transcription = outcome?;
    cleanup?;

    Ok(Transcript {
        text: transcription.text.trim().to_string(),
        confidence: transcription.confidence.unwrap_or(DEFAULT_CONFIDENCE),
    })
}

async fn transcribe_file(
    transcription_provider: &dyn transcription::Provider,
    path: &Path,
    audio: &[u8],
) -> Result<Transcription, Error> {
    tokio::fs::write(path, audio).await?;
    Ok(transcription_provider.transcribe(path).await?)
}
