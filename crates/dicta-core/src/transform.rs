//! Text-improvement client for the remote chat-completion service.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::GroqConfig;
use crate::error::PipelineError;
use crate::model::TextModel;
use crate::transcription::DEFAULT_TIMEOUT_SECS;

// Generation policy constants, not user-configurable
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 4096;

/// Rewrites text under a style directive via a remote call.
///
/// Callers are responsible for the non-empty-text precondition; the client
/// sends whatever it is given.
#[async_trait]
pub trait TextTransform {
    async fn transform(
        &self,
        text: &str,
        style_directive: &str,
        model: TextModel,
    ) -> Result<String, PipelineError>;
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Groq chat-completion transform client
pub struct GroqTransformer {
    http: reqwest::Client,
    config: GroqConfig,
}

impl GroqTransformer {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// System instruction: the style directive plus the two fixed sub-instructions.
fn system_prompt(style_directive: &str) -> String {
    format!(
        "You are a text improvement assistant. {style_directive}. \
         Maintain the core meaning while adjusting the tone and style. \
         Organize the text into proper paragraphs and fix any grammar or spelling issues."
    )
}

fn request_body(text: &str, style_directive: &str, model: TextModel) -> serde_json::Value {
    serde_json::json!({
        "model": model.as_str(),
        "messages": [
            {"role": "system", "content": system_prompt(style_directive)},
            {"role": "user", "content": text}
        ],
        "temperature": TEMPERATURE,
        "max_tokens": MAX_TOKENS,
    })
}

#[async_trait]
impl TextTransform for GroqTransformer {
    async fn transform(
        &self,
        text: &str,
        style_directive: &str,
        model: TextModel,
    ) -> Result<String, PipelineError> {
        crate::verbose!(
            "Transforming {} chars with model {model} (style: {style_directive})",
            text.len()
        );

        let response = self
            .http
            .post(&self.config.chat_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request_body(text, style_directive, model))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            crate::verbose!("Transform failed ({status}): {body}");
            return Err(PipelineError::Service {
                status: status.as_u16(),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            // A 2xx body with no choices still counts as a service failure
            .ok_or(PipelineError::Service {
                status: status.as_u16(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_carries_directive_and_fixed_instructions() {
        let prompt = system_prompt("Make my text casual and friendly");
        assert!(prompt.starts_with("You are a text improvement assistant."));
        assert!(prompt.contains("Make my text casual and friendly"));
        assert!(prompt.contains("Maintain the core meaning"));
        assert!(prompt.contains("proper paragraphs"));
    }

    #[test]
    fn request_body_uses_fixed_generation_parameters() {
        let body = request_body("hello", "Make it formal", TextModel::Llama370b8192);
        assert_eq!(body["model"], "llama3-70b-8192");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "hello");
    }
}
