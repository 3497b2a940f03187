//! Shared command plumbing for the dicta CLI.

use anyhow::Result;
use std::io::Read;

use dicta_core::{
    AudioPayload, MicRecorder, Pipeline, SpeechToText, StylePreset, TextTransform,
    copy_to_clipboard,
};

/// Record from the default microphone until the user presses Enter.
pub fn record_until_enter() -> Result<AudioPayload> {
    let mut recorder = MicRecorder::new();
    recorder.start()?;
    eprintln!("Recording... press Enter to stop.");

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(recorder.stop()?)
}

/// Read all of stdin as the text to improve.
pub fn read_stdin_text() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Optionally restyle the committed text, then print it (and copy it).
///
/// Remote failures live in the pipeline's error field, not in the submit
/// result; surface them here as process errors.
pub async fn finish<S, T>(
    pipeline: &mut Pipeline<S, T>,
    improve: Option<StylePreset>,
    copy: bool,
) -> Result<()>
where
    S: SpeechToText,
    T: TextTransform,
{
    if let Some(message) = pipeline.error() {
        anyhow::bail!("{message}");
    }

    if let Some(style) = improve {
        pipeline.submit_transform(style.directive()).await?;
        if let Some(message) = pipeline.error() {
            anyhow::bail!("{message}");
        }
    }

    println!("{}", pipeline.text());

    if copy {
        copy_to_clipboard(pipeline.text())?;
        eprintln!("Copied to clipboard.");
    }

    Ok(())
}
