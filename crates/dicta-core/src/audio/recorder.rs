//! Microphone capture via cpal.
//!
//! The input stream's callback converts samples to i16-LE bytes and sends
//! them as `CaptureEvent`s over a channel; a single ingestion loop in
//! `stop()` moves them into the `RecordingSession` in arrival order. The
//! stream is dropped on every `stop()`, releasing the device with no leak
//! path.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};
use crossbeam_channel::{Receiver, Sender};
use std::sync::atomic::{AtomicU64, Ordering};

use super::encoder::encode_wav;
use super::session::RecordingSession;
use super::{AudioPayload, CaptureEvent};
use crate::error::PipelineError;

const WAV_MIME: &str = "audio/wav";

/// Stream errors seen during the current recording (reset per session).
/// ALSA emits these regularly on some hardware; they are non-fatal.
static STREAM_ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

/// Captures one `AudioPayload` per start/stop cycle.
///
/// Callers must stop an in-progress recording before starting a new one;
/// there is no guard beyond this documented precondition.
pub struct MicRecorder {
    stream: Option<Stream>,
    tx: Sender<CaptureEvent>,
    rx: Receiver<CaptureEvent>,
    session: RecordingSession,
    channels: u16,
    sample_rate: u32,
}

impl MicRecorder {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            stream: None,
            tx,
            rx,
            session: RecordingSession::new(),
            channels: 1,
            sample_rate: 16_000,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.stream.is_some()
    }

    /// Request microphone access and begin buffering chunks.
    ///
    /// Fails with `DeviceUnavailable` when no input device exists and
    /// `PermissionDenied` when the platform refuses access. On failure the
    /// session stays Idle; the cause is logged, not stored in pipeline state.
    pub fn start(&mut self) -> Result<(), PipelineError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or(PipelineError::DeviceUnavailable)?;

        let supported = device.default_input_config().map_err(|e| {
            crate::verbose!("Failed to query input config: {e}");
            PipelineError::DeviceUnavailable
        })?;
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();
        self.channels = config.channels;
        self.sample_rate = config.sample_rate.0;

        // Discard chunks left over from an aborted earlier session
        while self.rx.try_recv().is_ok() {}
        STREAM_ERROR_COUNT.store(0, Ordering::Relaxed);

        let stream = match sample_format {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, self.tx.clone()),
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, self.tx.clone()),
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, self.tx.clone()),
            other => {
                return Err(PipelineError::AudioInput(format!(
                    "unsupported sample format: {other:?}"
                )));
            }
        }?;

        stream.play().map_err(|e| {
            crate::verbose!("Failed to start input stream: {e}");
            map_play_error(e)
        })?;

        self.session.begin();
        self.stream = Some(stream);
        crate::verbose!(
            "Recording started ({} ch, {} Hz)",
            self.channels,
            self.sample_rate
        );
        Ok(())
    }

    /// Stop capture, release the device, and finalize the session into a
    /// WAV payload. Valid only while a recording is in progress.
    pub fn stop(&mut self) -> Result<AudioPayload, PipelineError> {
        let stream = self
            .stream
            .take()
            .ok_or_else(|| PipelineError::AudioInput("no recording in progress".into()))?;

        // Dropping the stream stops the callback thread and releases the
        // device. Chunks already queued stay ahead of the sentinel.
        drop(stream);
        let _ = self.tx.send(CaptureEvent::Stopped);

        while let Ok(event) = self.rx.recv() {
            match event {
                CaptureEvent::Chunk(bytes) => self.session.push_chunk(bytes),
                CaptureEvent::Stopped => break,
            }
        }

        let errors = STREAM_ERROR_COUNT.load(Ordering::Relaxed);
        if errors > 0 {
            crate::verbose!("Recording finished with {errors} non-fatal stream errors");
        }

        let pcm = self.session.finalize(WAV_MIME);
        let wav = encode_wav(pcm.bytes(), self.channels, self.sample_rate)?;
        crate::verbose!("Captured {:.1} KB of audio", wav.len() as f64 / 1024.0);
        Ok(AudioPayload::recorded(wav, WAV_MIME))
    }
}

impl Default for MicRecorder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_stream<T>(
    device: &Device,
    config: &StreamConfig,
    tx: Sender<CaptureEvent>,
) -> Result<Stream, PipelineError>
where
    T: cpal::SizedSample,
    i16: cpal::FromSample<T>,
{
    // Rate-limited handler: ALSA buffer-timing errors are common on Linux
    // and don't affect the captured audio
    let err_fn = |err| {
        let count = STREAM_ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
        if count == 0 {
            crate::verbose!("Audio stream error (non-fatal): {err}");
        } else if count % 1000 == 0 {
            crate::verbose!("Audio stream: {count} non-fatal errors so far");
        }
    };

    let stream = device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                let mut bytes = Vec::with_capacity(data.len() * 2);
                for &sample in data {
                    let s: i16 = cpal::Sample::from_sample(sample);
                    bytes.extend_from_slice(&s.to_le_bytes());
                }
                let _ = tx.send(CaptureEvent::Chunk(bytes));
            },
            err_fn,
            None,
        )
        .map_err(|e| {
            crate::verbose!("Failed to open input stream: {e}");
            map_build_error(e)
        })?;

    Ok(stream)
}

fn map_build_error(err: cpal::BuildStreamError) -> PipelineError {
    match err {
        cpal::BuildStreamError::DeviceNotAvailable => PipelineError::DeviceUnavailable,
        // Backend-specific refusal is how platforms report denied access
        cpal::BuildStreamError::BackendSpecific { .. } => PipelineError::PermissionDenied,
        _ => PipelineError::DeviceUnavailable,
    }
}

fn map_play_error(err: cpal::PlayStreamError) -> PipelineError {
    match err {
        cpal::PlayStreamError::DeviceNotAvailable => PipelineError::DeviceUnavailable,
        _ => PipelineError::PermissionDenied,
    }
}
