//! Audio capture and loading.
//!
//! One `AudioPayload` is produced per user-initiated capture action, either
//! by finalizing a microphone recording or by reading a file in full. The
//! payload is consumed exactly once by the transcription client.

mod encoder;
mod loader;
mod recorder;
mod session;

pub use loader::load_audio_file;
pub use recorder::MicRecorder;
pub use session::{RecordingSession, SessionState};

/// Where a payload's bytes came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioOrigin {
    Recorded,
    Uploaded,
}

/// An immutable, fully-buffered audio blob ready for transmission.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    bytes: Vec<u8>,
    mime_type: String,
    origin: AudioOrigin,
}

impl AudioPayload {
    /// Create a payload from a finalized microphone recording
    pub fn recorded(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            origin: AudioOrigin::Recorded,
        }
    }

    /// Create a payload from a fully-read user file
    pub fn uploaded(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            origin: AudioOrigin::Uploaded,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn origin(&self) -> AudioOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Upload filename derived from the MIME subtype (`audio/webm` → `audio.webm`)
    pub fn filename(&self) -> String {
        let subtype = self
            .mime_type
            .split('/')
            .nth(1)
            .filter(|s| !s.is_empty())
            .unwrap_or("bin");
        format!("audio.{subtype}")
    }
}

/// Typed events emitted by a capture device.
///
/// Chunks arrive at the device's native cadence; `Stopped` marks the end of
/// the stream so the ingestion loop knows when to finalize.
#[derive(Debug)]
pub enum CaptureEvent {
    Chunk(Vec<u8>),
    Stopped,
}
