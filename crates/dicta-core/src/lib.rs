pub mod audio;
#[cfg(feature = "clipboard")]
pub mod clipboard;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod style;
pub mod transcription;
pub mod transform;
pub mod verbose;

pub use audio::{
    AudioOrigin, AudioPayload, CaptureEvent, MicRecorder, RecordingSession, SessionState,
    load_audio_file,
};
#[cfg(feature = "clipboard")]
pub use clipboard::copy_to_clipboard;
pub use config::{API_KEY_ENV_VAR, GroqConfig};
pub use error::PipelineError;
pub use model::{TextModel, VoiceModel};
pub use pipeline::{LANGUAGE, Pipeline, PipelineState};
pub use style::StylePreset;
pub use transcription::{DEFAULT_TIMEOUT_SECS, GroqTranscriber, SpeechToText};
pub use transform::{GroqTransformer, TextTransform};
pub use verbose::set_verbose;
