use chrono::{DateTime, FixedOffset};
use domain::conversations::Model as ConversationModel;
use domain::question::Answer;
use domain::source::Source;
use domain::transcription::Transcript;
use domain::Id;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AnswerResponse {
    pub(crate) answer: String,
    /// `dataset` when copied from the FAQ table, `llm` when generated
    #[schema(value_type = String)]
    pub(crate) source: Source,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer: answer.answer,
            source: answer.source,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct TranscriptResponse {
    pub(crate) text: String,
    /// 0.0 when the transcription service reports no confidence
    pub(crate) confidence: f64,
}

impl From<Transcript> for TranscriptResponse {
    fn from(transcript: Transcript) -> Self {
        Self {
            text: transcript.text,
            confidence: transcript.confidence,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SummaryResponse {
    /// Generated summary, or a fixed notice when the session has no recorded questions
    pub(crate) summary: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ConversationTurnResponse {
    #[schema(value_type = String, format = Uuid)]
    pub(crate) id: Id,
    pub(crate) question: String,
    pub(crate) answer: String,
    #[schema(value_type = String)]
    pub(crate) source: Source,
    #[schema(value_type = String, format = DateTime)]
    pub(crate) timestamp: DateTime<FixedOffset>,
}

impl From<ConversationModel> for ConversationTurnResponse {
    fn from(turn: ConversationModel) -> Self {
        Self {
            id: turn.id,
            question: turn.question,
            answer: turn.answer,
            source: turn.source,
            timestamp: turn.created_at,
        }
    }
}
