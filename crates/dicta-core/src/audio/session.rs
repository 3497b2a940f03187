//! Recording session state machine.
//!
//! `Idle --begin--> Recording --finalize--> Idle` (Stopped is transient).
//! Chunks are buffered in arrival order while Recording and concatenated
//! into one payload at finalization. The session is owned exclusively by
//! the recorder; callers must stop an in-progress recording before starting
//! a new one (there is no Recording → Recording transition).

use super::AudioPayload;

/// Lifecycle of one capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording,
    Stopped,
}

/// Accumulates raw audio chunks between begin and finalize.
#[derive(Debug)]
pub struct RecordingSession {
    state: SessionState,
    chunks: Vec<Vec<u8>>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            chunks: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Transition Idle → Recording. Precondition: state is Idle.
    pub fn begin(&mut self) {
        debug_assert_eq!(self.state, SessionState::Idle);
        self.chunks.clear();
        self.state = SessionState::Recording;
    }

    /// Buffer one chunk. Chunks are kept in arrival order, never reordered.
    pub fn push_chunk(&mut self, chunk: Vec<u8>) {
        debug_assert_eq!(self.state, SessionState::Recording);
        self.chunks.push(chunk);
    }

    /// Concatenate the buffered chunks into one immutable payload, clear the
    /// chunk list, and return to Idle ready for reuse.
    pub fn finalize(&mut self, mime_type: &str) -> AudioPayload {
        self.state = SessionState::Stopped;

        let total: usize = self.chunks.iter().map(Vec::len).sum();
        let mut bytes = Vec::with_capacity(total);
        for chunk in self.chunks.drain(..) {
            bytes.extend_from_slice(&chunk);
        }

        self.state = SessionState::Idle;
        AudioPayload::recorded(bytes, mime_type)
    }
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioOrigin;

    #[test]
    fn chunks_concatenate_in_arrival_order() {
        let mut session = RecordingSession::new();
        session.begin();
        session.push_chunk(vec![1, 2]);
        session.push_chunk(vec![3]);
        session.push_chunk(vec![4, 5, 6]);

        let payload = session.finalize("audio/wav");
        assert_eq!(payload.bytes(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(payload.origin(), AudioOrigin::Recorded);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn finalize_clears_chunks_for_reuse() {
        let mut session = RecordingSession::new();
        session.begin();
        session.push_chunk(vec![9]);
        let _ = session.finalize("audio/wav");

        session.begin();
        session.push_chunk(vec![7]);
        let payload = session.finalize("audio/wav");
        assert_eq!(payload.bytes(), &[7]);
    }

    #[test]
    fn empty_session_finalizes_to_empty_payload() {
        let mut session = RecordingSession::new();
        session.begin();
        let payload = session.finalize("audio/wav");
        assert!(payload.is_empty());
    }
}
