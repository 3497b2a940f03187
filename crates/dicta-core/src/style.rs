//! Predefined style directives for text improvement.
//!
//! The orchestrator accepts any free-form directive string; these presets
//! cover the common rewrites so callers don't have to type one out.

use std::fmt;
use std::str::FromStr;

/// Built-in rewrite styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    Improve,
    Concise,
    Professional,
    Funny,
    Casual,
    Mario,
    Homer,
}

impl StylePreset {
    /// Get the natural-language directive for this preset
    pub fn directive(&self) -> &'static str {
        match self {
            StylePreset::Improve => {
                "Improve this text by enhancing grammar, sentence structure, and overall clarity \
                 while maintaining the original meaning. Only return the improved text."
            }
            StylePreset::Concise => {
                "Rewrite this text to be as concise as possible while maintaining all key \
                 information and meaning. Remove any redundancy and unnecessary words. \
                 Only return the shortened text."
            }
            StylePreset::Professional => "Make my text formal and professional",
            StylePreset::Funny => "Make my text funny and witty",
            StylePreset::Casual => "Make my text casual and friendly",
            StylePreset::Mario => "Make my text sound like Mario",
            StylePreset::Homer => "Make my text sound like Homer Simpson",
        }
    }

    /// Get all available preset names
    pub fn all() -> &'static [&'static str] {
        &[
            "improve",
            "concise",
            "professional",
            "funny",
            "casual",
            "mario",
            "homer",
        ]
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylePreset::Improve => write!(f, "improve"),
            StylePreset::Concise => write!(f, "concise"),
            StylePreset::Professional => write!(f, "professional"),
            StylePreset::Funny => write!(f, "funny"),
            StylePreset::Casual => write!(f, "casual"),
            StylePreset::Mario => write!(f, "mario"),
            StylePreset::Homer => write!(f, "homer"),
        }
    }
}

impl FromStr for StylePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "improve" => Ok(StylePreset::Improve),
            "concise" => Ok(StylePreset::Concise),
            "professional" => Ok(StylePreset::Professional),
            "funny" => Ok(StylePreset::Funny),
            "casual" => Ok(StylePreset::Casual),
            "mario" => Ok(StylePreset::Mario),
            "homer" => Ok(StylePreset::Homer),
            _ => Err(format!(
                "Unknown style: '{}'. Available: {}",
                s,
                StylePreset::all().join(", ")
            )),
        }
    }
}
