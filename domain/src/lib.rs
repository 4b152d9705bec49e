//! Business logic for the meeting assistant.
//!
//! Consumers of the `domain` crate do not need to depend on `entity_api` directly: the
//! table models are re-exported here, and every store or provider failure is translated
//! into `domain::error::Error`.

// Re-exports from `entity` crate via `entity_api`
pub use entity_api::{conversations, faqs, meeting_summaries, source, Id};

pub mod conversation;
pub mod error;
pub mod meeting_summary;
pub mod question;
pub mod topic;
pub mod transcription;

pub mod gateway;
