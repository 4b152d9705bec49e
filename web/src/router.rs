use crate::controller::{
    conversation_controller, health_check_controller, question_controller, summary_controller,
    transcription_controller,
};
use crate::{params, response, AppState};
use axum::{
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Video Meeting AI Assistant API"
        ),
        paths(
            health_check_controller::index,
            health_check_controller::health_check,
            question_controller::ask,
            transcription_controller::transcribe,
            summary_controller::create,
            conversation_controller::index,
        ),
        components(
            schemas(
                params::question::AskParams,
                params::summary::SummaryParams,
                response::assistant::AnswerResponse,
                response::assistant::TranscriptResponse,
                response::assistant::SummaryResponse,
                response::assistant::ConversationTurnResponse,
                response::status::HealthResponse,
                response::status::RootResponse,
            )
        ),
        tags(
            (name = "meeting_assistant", description = "In-meeting question answering, transcription and summaries")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(question_routes(app_state.clone()))
        .merge(transcription_routes(app_state.clone()))
        .merge(summary_routes(app_state.clone()))
        .merge(conversation_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn health_routes() -> Router {
    Router::new()
        .route("/", get(health_check_controller::index))
        .route("/health", get(health_check_controller::health_check))
}

fn question_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/ask", post(question_controller::ask))
        .with_state(app_state)
}

fn transcription_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/transcribe", post(transcription_controller::transcribe))
        .with_state(app_state)
}

fn summary_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_controller::create))
        .with_state(app_state)
}

fn conversation_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/sessions/{session_id}/conversations",
            get(conversation_controller::index),
        )
        .with_state(app_state)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod router_tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::extract::DefaultBodyLimit;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use chrono::{DateTime, Utc};
    use clap::Parser;
    use domain::source::Source;
    use domain::{conversations, faqs, meeting_summaries, Id};
    use meeting_ai::traits::{completion, transcription};
    use meeting_ai::{Completion, Transcription};
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
    use serde_json::{json, Value};
    use service::config::Config;
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "meeting-assistant-boundary";

    fn app(
        db: DatabaseConnection,
        completion_provider: completion::MockProvider,
        transcription_provider: transcription::MockProvider,
    ) -> Router {
        let config = Config::try_parse_from([
            "meeting_assistant",
            "--openai-api-key",
            "sk-test",
            "--database-url",
            "postgres://assistant@localhost:5432/postgres",
            "--database-password",
            "password",
        ])
        .unwrap();
        let app_state = AppState::new(
            config,
            &Arc::new(db),
            Arc::new(completion_provider),
            Arc::new(transcription_provider),
        );
        define_routes(app_state)
    }

    fn idle_app(db: DatabaseConnection) -> Router {
        let mut completion_provider = completion::MockProvider::new();
        completion_provider.expect_complete().never();
        let mut transcription_provider = transcription::MockProvider::new();
        transcription_provider.expect_transcribe().never();
        app(db, completion_provider, transcription_provider)
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        raw_request(uri, "application/json", body.to_string())
    }

    fn raw_request(uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap()
    }

    fn detail(body: &Value) -> &str {
        body["detail"].as_str().unwrap()
    }

    fn multipart_request(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match file_name {
                Some(file_name) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: audio/wav\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/transcribe")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn turn(question: &str, answer: &str, source: Source) -> conversations::Model {
        conversations::Model {
            id: Id::new_v4(),
            session_id: "session-1".to_owned(),
            question: question.to_owned(),
            answer: answer.to_owned(),
            source,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn root_returns_the_service_greeting() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = idle_app(empty_db()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Video Meeting AI Assistant API"})
        );
    }

    #[tokio::test]
    async fn health_reports_healthy_with_a_fresh_timestamp() {
        let before = Utc::now();
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = idle_app(empty_db()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        let timestamp: DateTime<Utc> = body["timestamp"].as_str().unwrap().parse().unwrap();
        assert!(timestamp >= before);
    }

    #[tokio::test]
    async fn ask_answers_from_the_faq_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[faqs::Model {
                id: Id::new_v4(),
                question: "How do I share my screen?".to_owned(),
                answer: "Click Share.".to_owned(),
                created_at: Utc::now().into(),
            }]])
            .append_query_results([[turn("share my screen", "Click Share.", Source::Dataset)]])
            .into_connection();

        let response = idle_app(db)
            .oneshot(json_request(
                "/ask",
                json!({"question": "share my screen", "session_id": "session-1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"answer": "Click Share.", "source": "dataset"})
        );
    }

    #[tokio::test]
    async fn ask_falls_back_to_the_language_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<faqs::Model>::new()])
            .append_query_results([[turn("What is Rust?", "✅ A language.", Source::Llm)]])
            .into_connection();

        let mut completion_provider = completion::MockProvider::new();
        completion_provider.expect_complete().times(1).returning(|_| {
            Ok(Completion {
                text: "✅ A language.".to_owned(),
                model: "gpt-4o-mini".to_owned(),
            })
        });

        let response = app(db, completion_provider, transcription::MockProvider::new())
            .oneshot(json_request(
                "/ask",
                json!({"question": "What is Rust?", "session_id": "session-1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"answer": "✅ A language.", "source": "llm"})
        );
    }

    #[tokio::test]
    async fn ask_without_a_session_id_is_rejected() {
        let response = idle_app(empty_db())
            .oneshot(json_request("/ask", json!({"question": "What is Rust?"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(detail(&body).contains("missing field `session_id`"));
    }

    #[tokio::test]
    async fn ask_with_malformed_json_is_rejected_with_detail() {
        let response = idle_app(empty_db())
            .oneshot(raw_request("/ask", "application/json", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(detail(&body).starts_with("Failed to parse the request body as JSON"));
    }

    #[tokio::test]
    async fn ask_without_a_json_content_type_is_rejected_with_detail() {
        let response = idle_app(empty_db())
            .oneshot(raw_request(
                "/ask",
                "text/plain",
                json!({"question": "q", "session_id": "s"}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(detail(&body).contains("application/json"));
    }

    #[tokio::test]
    async fn oversized_json_bodies_are_rejected_as_too_large() {
        let question = "x".repeat(1024);
        let response = idle_app(empty_db())
            .layer(DefaultBodyLimit::max(64))
            .oneshot(json_request(
                "/ask",
                json!({"question": question, "session_id": "session-1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = body_json(response).await;
        assert!(!detail(&body).is_empty());
    }

    #[tokio::test]
    async fn ask_reports_store_failures_as_server_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_owned())])
            .into_connection();

        let response = idle_app(db)
            .oneshot(json_request(
                "/ask",
                json!({"question": "What is Rust?", "session_id": "session-1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn summary_of_an_empty_session_is_a_fixed_notice() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<conversations::Model>::new()])
            .into_connection();

        let response = idle_app(db)
            .oneshot(json_request(
                "/summary",
                json!({"session_id": "session-1", "duration": "5 minutes"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"summary": "No conversations found for this session."})
        );
    }

    #[tokio::test]
    async fn summary_with_a_mistyped_field_is_rejected_with_detail() {
        let response = idle_app(empty_db())
            .oneshot(json_request("/summary", json!({"session_id": 42})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(detail(&body).starts_with("Failed to deserialize the JSON body"));
    }

    #[tokio::test]
    async fn summary_is_generated_and_returned() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![turn("What is the demo about?", "Search.", Source::Llm)]])
            .append_query_results([[meeting_summaries::Model {
                id: Id::new_v4(),
                session_id: "session-1".to_owned(),
                summary: "A short demo.".to_owned(),
                total_messages: 1,
                duration: "5 minutes".to_owned(),
                key_topics: vec!["Meeting Management".to_owned()],
                created_at: Utc::now().into(),
            }]])
            .into_connection();

        let mut completion_provider = completion::MockProvider::new();
        completion_provider.expect_complete().times(1).returning(|_| {
            Ok(Completion {
                text: "A short demo.".to_owned(),
                model: "gpt-4o-mini".to_owned(),
            })
        });

        let response = app(db, completion_provider, transcription::MockProvider::new())
            .oneshot(json_request(
                "/summary",
                json!({"session_id": "session-1", "duration": "5 minutes"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"summary": "A short demo."}));
    }

    #[tokio::test]
    async fn transcribe_returns_trimmed_text() {
        let mut transcription_provider = transcription::MockProvider::new();
        transcription_provider
            .expect_provider_id()
            .return_const("whisper".to_owned());
        transcription_provider
            .expect_transcribe()
            .times(1)
            .returning(|_| {
                Ok(Transcription {
                    text: " Next slide please. ".to_owned(),
                    confidence: Some(0.8),
                })
            });

        let response = app(
            empty_db(),
            completion::MockProvider::new(),
            transcription_provider,
        )
        .oneshot(multipart_request(&[
            ("session_id", None, &b"session-1"[..]),
            ("audio", Some("clip.wav"), &b"RIFF-audio"[..]),
        ]))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"text": "Next slide please.", "confidence": 0.8})
        );
    }

    #[tokio::test]
    async fn transcribe_without_audio_is_rejected() {
        let response = idle_app(empty_db())
            .oneshot(multipart_request(&[("session_id", None, &b"session-1"[..])]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "missing `audio` form field"})
        );
    }

    #[tokio::test]
    async fn transcribe_without_a_multipart_body_is_rejected_with_detail() {
        let response = idle_app(empty_db())
            .oneshot(raw_request("/transcribe", "application/json", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(!detail(&body).is_empty());
    }

    #[tokio::test]
    async fn oversized_uploads_are_rejected_as_too_large() {
        let audio = vec![0u8; 1024];
        let response = idle_app(empty_db())
            .layer(DefaultBodyLimit::max(64))
            .oneshot(multipart_request(&[
                ("audio", Some("clip.wav"), &audio[..]),
                ("session_id", None, &b"session-1"[..]),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = body_json(response).await;
        assert!(!detail(&body).is_empty());
    }

    #[tokio::test]
    async fn session_history_lists_turns() {
        let first = turn("What is Rust?", "A language.", Source::Llm);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![first.clone()]])
            .into_connection();

        let request = Request::builder()
            .uri("/sessions/session-1/conversations")
            .body(Body::empty())
            .unwrap();
        let response = idle_app(db).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["id"], first.id.to_string());
        assert_eq!(body[0]["question"], "What is Rust?");
        assert_eq!(body[0]["source"], "llm");
        assert!(body[0]["timestamp"].is_string());
    }
}
