//! Routes an incoming question to a stored FAQ answer or to the language model.

use crate::error::Error;
use entity_api::conversation::{self, ConversationInput};
use entity_api::faq;
use entity_api::source::Source;
use log::*;
use meeting_ai::traits::completion;
use meeting_ai::CompletionRequest;
use sea_orm::DatabaseConnection;
use serde::Serialize;

const ASSISTANT_SYSTEM_PROMPT: &str = "You are a professional AI assistant helping users during live video calls.

Guidelines:
- Provide clear, concise answers in bullet points when appropriate
- Be friendly but professional
- Include code examples when relevant, formatted as markdown code blocks
- Keep responses helpful and actionable
- Use emojis occasionally (✅, 🔹, 🧠) for clarity
- Format technical content clearly

Always prioritize clarity and usefulness in your responses.";

const ANSWER_MAX_TOKENS: u32 = 800;
const ANSWER_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub answer: String,
    pub source: Source,
}

/// Answers `question` for `session_id` and appends the exchange to the session's history.
///
/// A stored FAQ entry whose question contains `question` (case-insensitively) wins; otherwise
/// the language model is asked. Generation failures come back as an apology in `answer` with
/// `source` set to `llm`, while store failures are returned as errors.
pub async fn answer(
    db: &DatabaseConnection,
    completion_provider: &dyn completion::Provider,
    session_id: &str,
    question: &str,
) -> Result<Answer, Error> {
    let (answer, source) = match faq::find_first_containing(db, question).await? {
        Some(entry) => {
            debug!("Answering from FAQ entry {} for session {}", entry.id, session_id);
            (entry.answer, Source::Dataset)
        }
        None => (generate_answer(completion_provider, question).await, Source::Llm),
    };

    conversation::create(
        db,
        ConversationInput {
            session_id: session_id.to_string(),
            question: question.to_string(),
            answer: answer.clone(),
            source,
        },
    )
    .await?;

    Ok(Answer { answer, source })
}

async fn generate_answer(completion_provider: &dyn completion::Provider, question: &str) -> String {
    let request = CompletionRequest {
        system: ASSISTANT_SYSTEM_PROMPT.to_string(),
        prompt: question.to_string(),
        max_tokens: ANSWER_MAX_TOKENS,
        temperature: ANSWER_TEMPERATURE,
    };

    match completion_provider.complete(request).await {
        Ok(completion) => completion.text,
        Err(e) => {
            warn!(
                "{} completion failed, answering with an apology: {}",
                completion_provider.provider_id(),
                e
            );
            format!("I apologize, but I encountered an error processing your request: {e}")
        }
    }
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, EntityErrorKind, InternalErrorKind};
    use entity_api::{conversations, faqs, Id};
    use meeting_ai::traits::completion::MockProvider;
    use meeting_ai::{Completion, Error as AiError};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    fn faq_entry(question: &str, answer: &str) -> faqs::Model {
        faqs::Model {
            id: Id::new_v4(),
            question: question.to_owned(),
            answer: answer.to_owned(),
            created_at: chrono::Utc::now().into(),
        }
    }

    fn turn(question: &str, answer: &str, source: Source) -> conversations::Model {
        conversations::Model {
            id: Id::new_v4(),
            session_id: "session-1".to_owned(),
            question: question.to_owned(),
            answer: answer.to_owned(),
            source,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn faq_hit_answers_from_dataset_without_calling_the_model() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[faq_entry(
                "What is this assistant?",
                "A meeting helper.",
            )]])
            .append_query_results([[turn("what is this", "A meeting helper.", Source::Dataset)]])
            .into_connection();

        let mut provider = MockProvider::new();
        provider.expect_complete().never();

        let answer = answer(&db, &provider, "session-1", "what is this").await?;

        assert_eq!(
            answer,
            Answer {
                answer: "A meeting helper.".to_owned(),
                source: Source::Dataset
            }
        );

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let insert = &log[1].statements()[0];
        assert!(insert.sql.starts_with(r#"INSERT INTO "conversations""#));
        let values = insert.values.as_ref().map(|v| v.0.clone()).unwrap_or_default();
        assert!(values.contains(&Value::from("dataset")));
        assert!(values.contains(&Value::from("session-1")));

        Ok(())
    }

    #[tokio::test]
    async fn faq_miss_answers_from_the_model() -> Result<(), Error> {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<faqs::Model>::new()])
            .append_query_results([[turn("What is Rust?", "A language.", Source::Llm)]]);
        let db = mock_db.into_connection();

        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .withf(|request| {
                request.prompt == "What is Rust?"
                    && request.max_tokens == 800
                    && request.system.contains("bullet points")
            })
            .times(1)
            .returning(|_| {
                Ok(Completion {
                    text: "A language.".to_owned(),
                    model: "gpt-4o-mini".to_owned(),
                })
            });

        let answer = answer(&db, &provider, "session-1", "What is Rust?").await?;

        assert_eq!(answer.answer, "A language.");
        assert_eq!(answer.source, Source::Llm);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let values = log[1].statements()[0]
            .values
            .as_ref()
            .map(|v| v.0.clone())
            .unwrap_or_default();
        assert!(values.contains(&Value::from("llm")));

        Ok(())
    }

    #[tokio::test]
    async fn generation_failure_becomes_an_apology_and_is_still_recorded() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<faqs::Model>::new()])
            .append_query_results([[turn("Why?", "apology", Source::Llm)]])
            .into_connection();

        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_| Err(AiError::Network("connection reset".to_owned())));
        provider
            .expect_provider_id()
            .times(1)
            .return_const("openai".to_owned());

        let answer = answer(&db, &provider, "session-1", "Why?").await?;

        assert_eq!(
            answer.answer,
            "I apologize, but I encountered an error processing your request: Network error: connection reset"
        );
        assert_eq!(answer.source, Source::Llm);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_owned())])
            .into_connection();

        let mut provider = MockProvider::new();
        provider.expect_complete().never();

        let result = answer(&db, &provider, "session-1", "What is Rust?").await;

        assert!(matches!(
            result.map_err(|e| e.error_kind),
            Err(DomainErrorKind::Internal(InternalErrorKind::Entity(
                EntityErrorKind::Other(_)
            )))
        ));
    }
}
