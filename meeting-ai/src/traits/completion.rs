//! Text completion provider trait.

use crate::types::completion::{Completion, CompletionRequest};
use crate::Error;
use async_trait::async_trait;

/// Abstraction for language generation services.
///
/// Implementations send a system instruction plus a user prompt and return the generated
/// text. Sampling parameters travel with each request so different callers (question
/// answering, summaries) can use different output budgets against the same client.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Generate a completion for `request`.
    async fn complete(&self, request: CompletionRequest) -> std::result::Result<Completion, Error>;

    /// Return unique identifier for this provider (e.g., "openai").
    fn provider_id(&self) -> &str;
}
