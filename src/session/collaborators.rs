//! Collaborator boundaries: synthesis, recognition, capture
//!
//! The scorer never talks to a speech API. Hosts implement these traits
//! and deliver results back as [`SessionEvent`](super::SessionEvent)s; only
//! a completed final transcript ever reaches scoring. Implementations live
//! with the host (browser, native, test fake); this module is the boundary
//! alone.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque host-assigned voice identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceId(String);

impl VoiceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An encoded audio clip captured during an attempt.
///
/// Held for the host to hand back to the user; nothing in scoring reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`, e.g. `audio/webm`.
    pub mime_type: String,
}

/// Reads the reference phrase aloud.
pub trait SpeechSynthesizer: Send {
    /// Queue `text` for audible playback, replacing any utterance still in
    /// progress. Playback is asynchronous; there is nothing to wait on.
    fn speak(&mut self, text: &str, voice: Option<&VoiceId>);
}

/// Produces final transcripts of the user's speech.
///
/// Single shot: one `start` yields at most one
/// [`TranscriptFinal`](super::SessionEvent::TranscriptFinal) or
/// [`RecognitionFailed`](super::SessionEvent::RecognitionFailed) event.
/// Partial results never cross this boundary.
pub trait SpeechRecognizer: Send {
    fn start(&mut self) -> Result<(), RecognitionError>;

    /// Abort a recognition in progress. A no-op when idle.
    fn stop(&mut self);
}

/// Records the attempt's audio, delivered as a
/// [`ClipCaptured`](super::SessionEvent::ClipCaptured) event.
pub trait ClipRecorder: Send {
    fn start(&mut self) -> Result<(), RecognitionError>;

    /// Finish recording. A no-op when idle.
    fn stop(&mut self);
}

/// Why recognition or capture produced nothing.
///
/// The `Display` text is what a host shows in its status line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RecognitionError {
    #[error("no speech detected")]
    NoSpeech,
    #[error("audio capture failed")]
    AudioCapture,
    #[error("microphone access denied")]
    NotAllowed,
    #[error("network error during recognition")]
    Network,
    #[error("recognition aborted")]
    Aborted,
    #[error("speech recognition unavailable on this host")]
    Unavailable,
    #[error("recognition error: {0}")]
    Other(String),
}
