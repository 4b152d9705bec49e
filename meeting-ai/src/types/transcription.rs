//! Types for transcription operations.

use serde::{Deserialize, Serialize};

/// Result of transcribing one audio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// Recognized text, as returned by the provider.
    pub text: String,
    /// Overall confidence, when the provider reports one.
    pub confidence: Option<f64>,
}
