//! Service configuration for the remote Groq endpoints.
//!
//! The bearer credential is passed in explicitly at construction time rather
//! than read from ambient process state, so tests can substitute their own
//! configuration (and endpoint URLs, for mock servers).

use anyhow::{Result, anyhow};

/// Environment variable holding the Groq API key
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

const TRANSCRIPTION_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";
const CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Connection details for the transcription and chat-completion services.
///
/// An absent or invalid key is not validated here; it surfaces as a service
/// error on the first remote call.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub transcription_url: String,
    pub chat_url: String,
}

impl GroqConfig {
    /// Create a configuration pointing at the production Groq endpoints
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            transcription_url: TRANSCRIPTION_URL.to_string(),
            chat_url: CHAT_URL.to_string(),
        }
    }

    /// Read the API key from the `GROQ_API_KEY` environment variable.
    ///
    /// The CLI calls `dotenvy::dotenv()` before this, so a `.env` file works.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .map_err(|_| anyhow!("{API_KEY_ENV_VAR} is not set. Export it or add it to .env"))?;
        Ok(Self::new(api_key))
    }
}
