//! Pipeline orchestration: the single owner of mutable session state.
//!
//! Sequences capture → transcription and, independently, edit → transform.
//! Processing is a flat busy/idle toggle enforcing single-flight: at most one
//! remote call is outstanding at a time, and a second submission while busy
//! is rejected rather than queued. Execution is single-threaded cooperative
//! (`&mut self` async methods), so the boolean gate needs no locking.

use crate::audio::AudioPayload;
use crate::error::PipelineError;
use crate::model::{TextModel, VoiceModel};
use crate::transcription::SpeechToText;
use crate::transform::TextTransform;

/// Fixed language tag sent with every transcription request
pub const LANGUAGE: &str = "en";

const TRANSCRIBE_FAILED_MSG: &str = "Failed to transcribe audio. Please try again.";
const TRANSFORM_FAILED_MSG: &str = "Failed to improve text. Please try again.";

/// Externally visible pipeline fields.
///
/// Created once with defaults and empty text; lives for the session. Mutated
/// only through `Pipeline` methods — observers (a UI, a REPL) read it via the
/// accessors and layer any notification scheme on top themselves.
#[derive(Debug)]
pub struct PipelineState {
    text: String,
    is_processing: bool,
    error: Option<String>,
    voice_model: VoiceModel,
    text_model: TextModel,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            text: String::new(),
            is_processing: false,
            error: None,
            voice_model: VoiceModel::default(),
            text_model: TextModel::default(),
        }
    }
}

/// Orchestrates the capture-transcribe-transform pipeline over two remote
/// clients. No component other than this one mutates `PipelineState`.
pub struct Pipeline<S, T> {
    stt: S,
    transformer: T,
    state: PipelineState,
}

impl<S: SpeechToText, T: TextTransform> Pipeline<S, T> {
    pub fn new(stt: S, transformer: T) -> Self {
        Self {
            stt,
            transformer,
            state: PipelineState::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn voice_model(&self) -> VoiceModel {
        self.state.voice_model
    }

    pub fn text_model(&self) -> TextModel {
        self.state.text_model
    }

    /// Transcribe a payload and commit the result as the document text.
    ///
    /// Rejected with `Busy` while another submission is in flight (a caller
    /// error, never queued). Remote failures never escape: they are converted
    /// into a user-facing message in `error`, with the prior text preserved.
    /// The processing flag is cleared on every exit path, after the outcome
    /// has been fully processed.
    pub async fn submit_audio(&mut self, payload: AudioPayload) -> Result<(), PipelineError> {
        if self.state.is_processing {
            return Err(PipelineError::Busy);
        }
        self.state.is_processing = true;
        self.state.error = None;

        let outcome = self
            .stt
            .transcribe(payload, self.state.voice_model, LANGUAGE)
            .await;
        match outcome {
            Ok(text) => self.state.text = text,
            Err(e) => {
                crate::verbose!("Transcription error: {e}");
                self.state.error = Some(TRANSCRIBE_FAILED_MSG.to_string());
            }
        }

        self.state.is_processing = false;
        Ok(())
    }

    /// Rewrite the current text under a style directive and commit the result.
    ///
    /// Whitespace-only text is a silent no-op (no remote call, state
    /// untouched), not an error. Same single-flight and cleanup discipline as
    /// `submit_audio`.
    pub async fn submit_transform(&mut self, style_directive: &str) -> Result<(), PipelineError> {
        if self.state.is_processing {
            return Err(PipelineError::Busy);
        }
        if self.state.text.trim().is_empty() {
            return Ok(());
        }
        self.state.is_processing = true;
        self.state.error = None;

        let outcome = self
            .transformer
            .transform(&self.state.text, style_directive, self.state.text_model)
            .await;
        match outcome {
            Ok(text) => self.state.text = text,
            Err(e) => {
                crate::verbose!("Transform error: {e}");
                self.state.error = Some(TRANSFORM_FAILED_MSG.to_string());
            }
        }

        self.state.is_processing = false;
        Ok(())
    }

    /// Replace the document text directly. Permitted at any time, including
    /// while a request is outstanding; if that request later commits, its
    /// result overwrites this edit (last commit wins, in completion order).
    pub fn edit_text(&mut self, new_text: impl Into<String>) {
        self.state.text = new_text.into();
    }

    /// Trim the text and collapse internal whitespace runs to single spaces.
    pub fn format_text(&mut self) {
        self.state.text = self
            .state
            .text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
    }

    /// Select the voice model for subsequent transcriptions. Identifiers
    /// outside the fixed catalog are rejected without mutating state.
    pub fn set_voice_model(&mut self, id: &str) -> Result<(), PipelineError> {
        self.state.voice_model = id
            .parse()
            .map_err(|_| PipelineError::InvalidModel(id.to_string()))?;
        Ok(())
    }

    /// Select the text model for subsequent transforms.
    pub fn set_text_model(&mut self, id: &str) -> Result<(), PipelineError> {
        self.state.text_model = id
            .parse()
            .map_err(|_| PipelineError::InvalidModel(id.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubStt {
        reply: Option<String>,
        fail_status: Option<u16>,
        calls: AtomicUsize,
        seen_model: Mutex<Option<VoiceModel>>,
    }

    impl StubStt {
        fn returning(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                ..Self::default()
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_status: Some(status),
                ..Self::default()
            }
        }
    }

    #[async_trait::async_trait]
    impl SpeechToText for StubStt {
        async fn transcribe(
            &self,
            _payload: AudioPayload,
            model: VoiceModel,
            language: &str,
        ) -> Result<String, PipelineError> {
            assert_eq!(language, "en");
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_model.lock().unwrap() = Some(model);
            match self.fail_status {
                Some(status) => Err(PipelineError::Service { status }),
                None => Ok(self.reply.clone().unwrap()),
            }
        }
    }

    #[derive(Default)]
    struct StubTransform {
        reply: Option<String>,
        fail_status: Option<u16>,
        calls: AtomicUsize,
    }

    impl StubTransform {
        fn returning(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                ..Self::default()
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_status: Some(status),
                ..Self::default()
            }
        }
    }

    #[async_trait::async_trait]
    impl TextTransform for StubTransform {
        async fn transform(
            &self,
            text: &str,
            _style_directive: &str,
            _model: TextModel,
        ) -> Result<String, PipelineError> {
            assert!(!text.trim().is_empty());
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_status {
                Some(status) => Err(PipelineError::Service { status }),
                None => Ok(self.reply.clone().unwrap()),
            }
        }
    }

    fn payload() -> AudioPayload {
        AudioPayload::recorded(vec![0; 16], "audio/wav")
    }

    #[tokio::test]
    async fn successful_transcription_commits_text() {
        let mut pipeline = Pipeline::new(StubStt::returning("hello world"), StubTransform::default());
        pipeline.submit_audio(payload()).await.unwrap();

        assert_eq!(pipeline.text(), "hello world");
        assert!(!pipeline.is_processing());
        assert_eq!(pipeline.error(), None);
    }

    #[tokio::test]
    async fn failed_transcription_preserves_text_and_sets_error() {
        let mut pipeline = Pipeline::new(StubStt::failing(500), StubTransform::default());
        pipeline.edit_text("previous draft");
        pipeline.submit_audio(payload()).await.unwrap();

        assert_eq!(pipeline.text(), "previous draft");
        assert_eq!(
            pipeline.error(),
            Some("Failed to transcribe audio. Please try again.")
        );
        assert!(!pipeline.is_processing());
    }

    #[tokio::test]
    async fn failed_transform_preserves_text_and_sets_error() {
        let mut pipeline = Pipeline::new(StubStt::default(), StubTransform::failing(429));
        pipeline.edit_text("keep me");
        pipeline.submit_transform("Make my text funny and witty").await.unwrap();

        assert_eq!(pipeline.text(), "keep me");
        assert_eq!(
            pipeline.error(),
            Some("Failed to improve text. Please try again.")
        );
        assert!(!pipeline.is_processing());
    }

    #[tokio::test]
    async fn error_clears_on_next_operation_start() {
        let mut pipeline = Pipeline::new(StubStt::failing(500), StubTransform::returning("better"));
        pipeline.edit_text("draft");
        pipeline.submit_audio(payload()).await.unwrap();
        assert!(pipeline.error().is_some());

        pipeline.submit_transform("Make my text casual and friendly").await.unwrap();
        assert_eq!(pipeline.error(), None);
        assert_eq!(pipeline.text(), "better");
    }

    #[tokio::test]
    async fn submissions_while_busy_are_rejected_without_a_remote_call() {
        let mut pipeline = Pipeline::new(StubStt::returning("x"), StubTransform::returning("y"));
        pipeline.edit_text("something");
        pipeline.state.is_processing = true;

        assert!(matches!(
            pipeline.submit_transform("Make my text casual and friendly").await,
            Err(PipelineError::Busy)
        ));
        assert!(matches!(
            pipeline.submit_audio(payload()).await,
            Err(PipelineError::Busy)
        ));
        assert_eq!(pipeline.transformer.calls.load(Ordering::SeqCst), 0);
        assert_eq!(pipeline.stt.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn whitespace_only_text_makes_transform_a_no_op() {
        let mut pipeline = Pipeline::new(StubStt::default(), StubTransform::returning("unused"));
        pipeline.edit_text("   ");
        pipeline.submit_transform("Make my text formal and professional").await.unwrap();

        assert_eq!(pipeline.text(), "   ");
        assert_eq!(pipeline.error(), None);
        assert!(!pipeline.is_processing());
        assert_eq!(pipeline.transformer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn interim_edits_are_overwritten_by_the_committing_result() {
        // Documented race: last commit wins in completion order
        let mut pipeline = Pipeline::new(StubStt::returning("final transcript"), StubTransform::default());
        pipeline.edit_text("typed while waiting");
        pipeline.submit_audio(payload()).await.unwrap();

        assert_eq!(pipeline.text(), "final transcript");
    }

    #[tokio::test]
    async fn end_to_end_record_transcribe_transform() {
        let mut pipeline = Pipeline::new(
            StubStt::returning("hello world"),
            StubTransform::returning("hey, what's up"),
        );
        assert_eq!(pipeline.text(), "");

        pipeline.submit_audio(payload()).await.unwrap();
        assert_eq!(pipeline.text(), "hello world");

        pipeline.submit_transform("Make my text casual and friendly").await.unwrap();
        assert_eq!(pipeline.text(), "hey, what's up");
        assert_eq!(pipeline.error(), None);
        assert!(!pipeline.is_processing());
    }

    #[tokio::test]
    async fn selected_voice_model_reaches_the_next_request() {
        let mut pipeline = Pipeline::new(StubStt::returning("t"), StubTransform::default());
        pipeline.set_voice_model("whisper-large-v3").unwrap();
        pipeline.submit_audio(payload()).await.unwrap();

        assert_eq!(
            *pipeline.stt.seen_model.lock().unwrap(),
            Some(VoiceModel::WhisperLargeV3)
        );
    }

    #[test]
    fn invalid_model_identifiers_leave_the_selection_unchanged() {
        let mut pipeline = Pipeline::new(StubStt::default(), StubTransform::default());
        pipeline.set_voice_model("whisper-large-v3").unwrap();

        assert!(matches!(
            pipeline.set_voice_model("not-a-model"),
            Err(PipelineError::InvalidModel(_))
        ));
        assert_eq!(pipeline.voice_model(), VoiceModel::WhisperLargeV3);

        assert!(matches!(
            pipeline.set_text_model("gpt-4"),
            Err(PipelineError::InvalidModel(_))
        ));
        assert_eq!(pipeline.text_model(), TextModel::default());
    }

    #[test]
    fn format_text_collapses_whitespace() {
        let mut pipeline = Pipeline::new(StubStt::default(), StubTransform::default());
        pipeline.edit_text("  hello   world \n twice  ");
        pipeline.format_text();
        assert_eq!(pipeline.text(), "hello world twice");
    }
}
