//! Speech-to-text client for the remote transcription service.
//!
//! The wire format is the OpenAI-compatible Whisper API: a multipart form
//! with `file`, `model`, and `language` fields, bearer-token auth, and a
//! JSON `{ "text": … }` response.

use async_trait::async_trait;
use serde::Deserialize;

use crate::audio::AudioPayload;
use crate::config::GroqConfig;
use crate::error::PipelineError;
use crate::model::VoiceModel;

/// Request timeout for both remote services
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Turns one audio payload into text via a remote call.
///
/// Behind a trait so orchestrator tests can substitute a stub.
#[async_trait]
pub trait SpeechToText {
    async fn transcribe(
        &self,
        payload: AudioPayload,
        model: VoiceModel,
        language: &str,
    ) -> Result<String, PipelineError>;
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Groq Whisper transcription client
pub struct GroqTranscriber {
    http: reqwest::Client,
    config: GroqConfig,
}

impl GroqTranscriber {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SpeechToText for GroqTranscriber {
    /// No retry, no caching; each request is independent. The returned text
    /// is used verbatim, without trimming or post-processing.
    async fn transcribe(
        &self,
        payload: AudioPayload,
        model: VoiceModel,
        language: &str,
    ) -> Result<String, PipelineError> {
        let filename = payload.filename();
        let mime_type = payload.mime_type().to_string();
        crate::verbose!(
            "Uploading {:.1} KB ({mime_type}) to {} with model {model}",
            payload.len() as f64 / 1024.0,
            self.config.transcription_url
        );

        let form = reqwest::multipart::Form::new()
            .text("model", model.as_str())
            .text("language", language.to_string())
            .part(
                "file",
                reqwest::multipart::Part::bytes(payload.into_bytes())
                    .file_name(filename)
                    .mime_str(&mime_type)?,
            );

        let response = self
            .http
            .post(&self.config.transcription_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            crate::verbose!("Transcription failed ({status}): {body}");
            return Err(PipelineError::Service {
                status: status.as_u16(),
            });
        }

        let parsed: TranscriptionResponse = response.json().await?;
        Ok(parsed.text)
    }
}
