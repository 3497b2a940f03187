//! Fixed model catalogs for the two remote services.
//!
//! The identifiers mirror what the Groq API accepts; anything outside these
//! sets is rejected at the setter boundary, never sent over the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Speech-to-text models accepted by the transcription endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum VoiceModel {
    #[serde(rename = "whisper-large-v3-turbo")]
    WhisperLargeV3Turbo,
    #[serde(rename = "whisper-large-v3")]
    WhisperLargeV3,
    #[default]
    #[serde(rename = "distil-whisper-large-v3-en")]
    DistilWhisperLargeV3En,
}

impl VoiceModel {
    /// Get the wire identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceModel::WhisperLargeV3Turbo => "whisper-large-v3-turbo",
            VoiceModel::WhisperLargeV3 => "whisper-large-v3",
            VoiceModel::DistilWhisperLargeV3En => "distil-whisper-large-v3-en",
        }
    }

    /// List all available voice models
    pub fn all() -> &'static [VoiceModel] {
        &[
            VoiceModel::WhisperLargeV3Turbo,
            VoiceModel::WhisperLargeV3,
            VoiceModel::DistilWhisperLargeV3En,
        ]
    }
}

impl fmt::Display for VoiceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VoiceModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whisper-large-v3-turbo" => Ok(VoiceModel::WhisperLargeV3Turbo),
            "whisper-large-v3" => Ok(VoiceModel::WhisperLargeV3),
            "distil-whisper-large-v3-en" => Ok(VoiceModel::DistilWhisperLargeV3En),
            _ => Err(format!(
                "Unknown voice model: {}. Available: whisper-large-v3-turbo, whisper-large-v3, distil-whisper-large-v3-en",
                s
            )),
        }
    }
}

/// Chat-completion models accepted by the text-transform endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum TextModel {
    #[default]
    #[serde(rename = "llama-3.2-3b-preview")]
    Llama32Preview3b,
    #[serde(rename = "llama3-70b-8192")]
    Llama370b8192,
    #[serde(rename = "llama-3.2-11b-text-preview")]
    Llama32TextPreview11b,
    #[serde(rename = "llama-3.2-90b-text-preview")]
    Llama32TextPreview90b,
}

impl TextModel {
    /// Get the wire identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            TextModel::Llama32Preview3b => "llama-3.2-3b-preview",
            TextModel::Llama370b8192 => "llama3-70b-8192",
            TextModel::Llama32TextPreview11b => "llama-3.2-11b-text-preview",
            TextModel::Llama32TextPreview90b => "llama-3.2-90b-text-preview",
        }
    }

    /// List all available text models
    pub fn all() -> &'static [TextModel] {
        &[
            TextModel::Llama32Preview3b,
            TextModel::Llama370b8192,
            TextModel::Llama32TextPreview11b,
            TextModel::Llama32TextPreview90b,
        ]
    }
}

impl fmt::Display for TextModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TextModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "llama-3.2-3b-preview" => Ok(TextModel::Llama32Preview3b),
            "llama3-70b-8192" => Ok(TextModel::Llama370b8192),
            "llama-3.2-11b-text-preview" => Ok(TextModel::Llama32TextPreview11b),
            "llama-3.2-90b-text-preview" => Ok(TextModel::Llama32TextPreview90b),
            _ => Err(format!(
                "Unknown text model: {}. Available: llama-3.2-3b-preview, llama3-70b-8192, llama-3.2-11b-text-preview, llama-3.2-90b-text-preview",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_model_round_trips_through_str() {
        for model in VoiceModel::all() {
            assert_eq!(model.as_str().parse::<VoiceModel>().unwrap(), *model);
        }
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert!("not-a-model".parse::<VoiceModel>().is_err());
        assert!("not-a-model".parse::<TextModel>().is_err());
    }

    #[test]
    fn defaults_match_the_catalog() {
        assert_eq!(VoiceModel::default(), VoiceModel::DistilWhisperLargeV3En);
        assert_eq!(TextModel::default(), TextModel::Llama32Preview3b);
    }
}
