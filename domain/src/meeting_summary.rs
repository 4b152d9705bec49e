//! Summarizes a session's question/answer history and stores the result.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::topic;
use entity_api::conversation;
use entity_api::conversations;
use entity_api::meeting_summary::{self, MeetingSummaryInput};
use log::*;
use meeting_ai::traits::completion;
use meeting_ai::CompletionRequest;
use sea_orm::DatabaseConnection;

pub const NO_CONVERSATIONS_MESSAGE: &str = "No conversations found for this session.";

const SUMMARY_SYSTEM_PROMPT: &str = "You are a professional meeting assistant creating summaries.";
const SUMMARY_MAX_TOKENS: u32 = 500;
const SUMMARY_TEMPERATURE: f32 = 0.7;

/// Generates a summary for `session_id`, stores it with its topic labels, and returns the text.
///
/// A session with no recorded turns yields `NO_CONVERSATIONS_MESSAGE`; nothing is generated or
/// stored in that case. Every failure, including generation, is returned to the caller.
pub async fn summarize(
    db: &DatabaseConnection,
    completion_provider: &dyn completion::Provider,
    session_id: &str,
    duration: &str,
) -> Result<String, Error> {
    let turns = conversation::find_by_session_id(db, session_id).await?;
    if turns.is_empty() {
        info!("No conversation turns recorded for session {}", session_id);
        return Ok(NO_CONVERSATIONS_MESSAGE.to_string());
    }

    let request = CompletionRequest {
        system: SUMMARY_SYSTEM_PROMPT.to_string(),
        prompt: summary_prompt(duration, &format_transcript(&turns)),
        max_tokens: SUMMARY_MAX_TOKENS,
        temperature: SUMMARY_TEMPERATURE,
    };
    let summary = completion_provider.complete(request).await?.text;

    let total_messages = i32::try_from(turns.len()).map_err(|e| Error {
        source: Some(Box::new(e)),
        error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
            "Too many conversation turns to summarize".to_string(),
        )),
    })?;

    let stored = meeting_summary::create(
        db,
        MeetingSummaryInput {
            session_id: session_id.to_string(),
            summary: summary.clone(),
            total_messages,
            duration: duration.to_string(),
            key_topics: topic::labels(&topic::extract_topics(&turns)),
        },
    )
    .await?;
    info!(
        "Stored meeting summary {} for session {} ({} turns)",
        stored.id, session_id, total_messages
    );

    Ok(summary)
}

fn format_transcript(turns: &[conversations::Model]) -> String {
    turns
        .iter()
        .map(|turn| format!("Q: {}\nA: {}\n\n", turn.question, turn.answer))
        .collect()
}

fn summary_prompt(duration: &str, transcript: &str) -> String {
    format!(
        "Please create a professional meeting summary based on the following Q&A exchanges \
         during a video call with an AI assistant.

Duration: {duration}

Conversation History:
{transcript}
Please provide:
1. A brief overview of the meeting
2. Key topics discussed
3. Main questions and insights
4. A friendly closing note

Keep it professional but warm, as if written by a human assistant."
    )
}
