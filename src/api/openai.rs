//! OpenAI implementation of the collaborator traits.
//!
//! Errors are plain [`Message`] texts so the HTTP layer can relay them to the
//! browser unchanged (`"Empty transcript from Whisper"`).

use super::prompts;
use super::{CsvGenerator, ReportWriter, Transcriber};
use crate::libs::config::OpenAiConfig;
use crate::libs::date::today_numeric;
use crate::libs::messages::Message;
use anyhow::{anyhow, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const TIMESHEET_MAX_TOKENS: u32 = 800;
const REPORT_MAX_TOKENS: u32 = 600;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct OpenAi {
    client: Client,
    config: OpenAiConfig,
    api_key: String,
}

impl OpenAi {
    pub fn new(config: OpenAiConfig, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            config,
            api_key: api_key.into(),
        }
    }

    /// Builds a client with the key from `OPENAI_API_KEY`.
    pub fn from_env(config: OpenAiConfig) -> Result<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(config, key.trim())),
            _ => Err(anyhow!(Message::OpenAiKeyMissing)),
        }
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Error text for a non-2xx response: the service's own message when it
    /// sends one, the status otherwise.
    async fn failure(response: Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => envelope.error.message,
            Err(_) => status.to_string(),
        }
    }

    async fn chat(&self, system: &str, user: String, max_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(system.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(user),
                },
            ],
            max_tokens,
        };

        info!(model = %self.config.model, max_tokens, "chat completion request");
        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!(Message::AiCallFailed(e.to_string())))?;

        if !response.status().is_success() {
            let details = Self::failure(response).await;
            warn!(%details, "chat completion failed");
            return Err(anyhow!(Message::AiCallFailed(details)));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| anyhow!(Message::AiCallFailed(e.to_string())))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
            .trim()
            .to_string();
        debug!(chars = content.len(), "chat completion received");
        Ok(content)
    }
}

impl Transcriber for OpenAi {
    async fn transcribe(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "recording.webm".to_string());

        info!(model = %self.config.transcribe_model, file = %file_name, bytes = bytes.len(), "transcription request");
        let form = Form::new()
            .text("model", self.config.transcribe_model.clone())
            .part("file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(self.endpoint("audio/transcriptions"))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| anyhow!(Message::TranscriptionFailed(e.to_string())))?;

        if !response.status().is_success() {
            let details = Self::failure(response).await;
            warn!(%details, "transcription failed");
            return Err(anyhow!(Message::TranscriptionFailed(details)));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| anyhow!(Message::TranscriptionFailed(e.to_string())))?;
        let text = parsed.text.trim().to_string();
        if text.is_empty() {
            return Err(anyhow!(Message::EmptyTranscript));
        }
        Ok(text)
    }
}

impl CsvGenerator for OpenAi {
    async fn generate_csv(&self, transcript: &str) -> Result<String> {
        let prompt = prompts::timesheet(transcript, &today_numeric());
        let content = self.chat(prompts::TIMESHEET_SYSTEM, prompt, TIMESHEET_MAX_TOKENS).await?;
        if content.is_empty() {
            return Err(anyhow!(Message::EmptyModelResponse));
        }
        Ok(content)
    }
}

impl ReportWriter for OpenAi {
    async fn write_report(&self, csv: &str, notes: &str) -> Result<String> {
        let content = self.chat(prompts::REPORT_SYSTEM, prompts::report(csv, notes), REPORT_MAX_TOKENS).await?;
        if content.is_empty() {
            return Err(anyhow!(Message::EmptyReport));
        }
        Ok(content)
    }
}
