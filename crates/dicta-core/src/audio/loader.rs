//! File-based audio loading.

use std::path::Path;

use super::AudioPayload;
use crate::error::PipelineError;

/// Read an audio file in full and wrap it in an uploaded payload.
///
/// The MIME type is derived from the file extension. Supported formats:
/// webm, wav, mp3, ogg, m4a, flac, aac, opus.
pub fn load_audio_file(path: &Path) -> Result<AudioPayload, PipelineError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mime_type = match extension.as_str() {
        "webm" => "audio/webm",
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        "opus" => "audio/opus",
        _ => {
            return Err(PipelineError::AudioInput(format!(
                "unsupported audio format: '{extension}'. Supported: webm, wav, mp3, ogg, m4a, flac, aac, opus"
            )));
        }
    };

    let bytes = std::fs::read(path)
        .map_err(|e| PipelineError::AudioInput(format!("failed to read {}: {e}", path.display())))?;

    crate::verbose!(
        "Loaded {} ({:.1} KB, {mime_type})",
        path.display(),
        bytes.len() as f64 / 1024.0
    );

    Ok(AudioPayload::uploaded(bytes, mime_type))
}
