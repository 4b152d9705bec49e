//! Meeting AI abstraction layer for language generation and transcription providers.
//!
//! This crate provides trait-based abstractions for the two external services the
//! assistant relies on:
//! - Text completion (answering questions, writing meeting summaries)
//! - Speech-to-text transcription of recorded audio
//!
//! The design is provider-agnostic so the HTTP layer and the domain logic never depend on
//! a particular vendor's client or wire format.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::completion::{Completion, CompletionRequest};
pub use types::transcription::Transcription;
