//! Transcription provider trait.

use crate::types::transcription::Transcription;
use crate::Error;
use async_trait::async_trait;
use std::path::Path;

/// Abstraction for speech-to-text services.
///
/// The audio is handed over as a local file so callers control where uploads are staged
/// and when they are removed.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Transcribe the audio file at `audio_path`.
    async fn transcribe(&self, audio_path: &Path) -> std::result::Result<Transcription, Error>;

    /// Return unique identifier for this provider (e.g., "openai").
    fn provider_id(&self) -> &str;
}
