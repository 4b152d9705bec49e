//! OpenAI API client for chat completions and audio transcription.
//!
//! A single `OpenAiClient` implements both `meeting_ai` provider traits so one
//! authenticated connection pool serves question answering, summaries and speech-to-text.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use async_trait::async_trait;
use log::*;
use meeting_ai::traits::{completion, transcription};
use meeting_ai::{Completion, CompletionRequest, Error as AiError, Transcription};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, RETRY_AFTER};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use service::config::Config;
use std::path::Path;
use std::time::Duration;

const PROVIDER_ID: &str = "openai";
const REQUEST_TIMEOUT_SECS: u64 = 120;
// Used when a 429 arrives without a parseable Retry-After header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;
const DEFAULT_AUDIO_FILE_NAME: &str = "audio.wav";
const AUDIO_MIME_TYPE: &str = "audio/wav";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
    #[serde(default)]
    confidence: Option<f64>,
}

pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    completion_model: String,
    transcription_model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();

        let mut header_value =
            HeaderValue::from_str(&format!("Bearer {}", config.openai_api_key())).map_err(|e| {
                warn!("Failed to create auth header: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
                }
            })?;
        header_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, header_value);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.openai_base_url().to_string(),
            completion_model: config.completion_model.clone(),
            transcription_model: config.transcription_model.clone(),
        })
    }
}

#[async_trait]
impl completion::Provider for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, AiError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.completion_model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(
            "Requesting completion from {} (max_tokens={})",
            self.completion_model, request.max_tokens
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse OpenAI completion response: {:?}", e);
            AiError::Deserialization(e.to_string())
        })?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AiError::EmptyResponse)?;

        Ok(Completion {
            text,
            model: completion.model,
        })
    }

    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }
}

#[async_trait]
impl transcription::Provider for OpenAiClient {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcription, AiError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let audio = tokio::fs::read(audio_path).await?;
        let file_name = audio_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_AUDIO_FILE_NAME)
            .to_string();

        debug!(
            "Uploading {} bytes of audio to {} for transcription",
            audio.len(),
            self.transcription_model
        );

        let file_part = Part::bytes(audio)
            .file_name(file_name)
            .mime_str(AUDIO_MIME_TYPE)
            .map_err(|e| AiError::Provider(e.to_string()))?;
        let form = Form::new()
            .part("file", file_part)
            .text("model", self.transcription_model.clone())
            .text("response_format", "json");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let transcription: TranscriptionResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse OpenAI transcription response: {:?}", e);
            AiError::Deserialization(e.to_string())
        })?;

        Ok(Transcription {
            text: transcription.text,
            confidence: transcription.confidence,
        })
    }

    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }
}

fn network_error(e: reqwest::Error) -> AiError {
    warn!("Failed to reach OpenAI: {:?}", e);
    AiError::Network(e.to_string())
}

async fn error_from_response(response: reqwest::Response) -> AiError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());
    let error_text = response.text().await.unwrap_or_default();
    error!("OpenAI API returned {}: {}", status, error_text);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AiError::Authentication(error_text),
        StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited {
            retry_after_seconds: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        _ => AiError::Provider(format!("{}: {}", status, error_text)),
    }
}
