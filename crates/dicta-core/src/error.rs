//! Failure taxonomy for the capture-transcribe-transform pipeline.

use thiserror::Error;

/// Errors surfaced by the pipeline and its collaborators.
///
/// Capture errors (`PermissionDenied`, `DeviceUnavailable`) are returned at
/// the audio boundary and never reach `PipelineState::error`; remote-call
/// errors are converted into a user-facing message by the orchestrator.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Microphone access was refused by the platform or the user.
    #[error("microphone permission denied")]
    PermissionDenied,

    /// No usable capture device is present.
    #[error("no audio input device available")]
    DeviceUnavailable,

    /// The transport could not complete the exchange.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("service returned status {status}")]
    Service { status: u16 },

    /// A model identifier outside the fixed catalog was supplied.
    #[error("unknown model: {0}")]
    InvalidModel(String),

    /// A second submission was attempted while one is in flight.
    #[error("a pipeline operation is already in flight")]
    Busy,

    /// Unsupported or unreadable audio input.
    #[error("audio input error: {0}")]
    AudioInput(String),
}
