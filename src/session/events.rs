//! Session events and the channel-driven runner
//!
//! Host callbacks (button presses, recognizer results, captured clips)
//! become typed messages on a channel, and one loop owns all mutable
//! state. Updates flow back out the same way, so hosts never reach for a
//! lock.

use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};

use super::collaborators::{
    AudioClip, ClipRecorder, RecognitionError, SpeechRecognizer, SpeechSynthesizer, VoiceId,
};
use super::{Attempt, PracticeSession};

/// Inbound messages: host interactions and collaborator results.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Read the current reference phrase aloud.
    SpeakRequested,
    /// Start single-shot recognition of the user's next utterance.
    ListenRequested,
    /// Stop recognition and capture in progress.
    StopRequested,
    /// Start recording the attempt's audio.
    RecordRequested,
    /// Final transcript from the recognizer.
    TranscriptFinal(String),
    /// The recognizer gave up.
    RecognitionFailed(RecognitionError),
    /// Recorded audio became available.
    ClipCaptured(AudioClip),
    /// The user picked a different phrase to practice.
    ReferenceChanged(String),
    /// The user picked a synthesis voice, or cleared the choice.
    VoiceSelected(Option<VoiceId>),
}

/// Outbound messages for the host to render.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// An attempt was scored; carries the full record.
    AttemptScored(Attempt),
    /// Status line text.
    Status(String),
}

/// The host-provided collaborators the runner drives.
pub struct Collaborators {
    pub synthesizer: Box<dyn SpeechSynthesizer>,
    pub recognizer: Box<dyn SpeechRecognizer>,
    pub recorder: Box<dyn ClipRecorder>,
}

/// Drive a practice session from an event stream.
///
/// Consumes events until every sender is dropped, then returns the
/// session. Updates that find no receiver are dropped silently, so a host
/// that only wants the final state may drop its receiver up front.
pub fn run_session(
    mut session: PracticeSession,
    mut collaborators: Collaborators,
    events: Receiver<SessionEvent>,
    updates: Sender<SessionUpdate>,
) -> PracticeSession {
    for event in events {
        handle_event(&mut session, &mut collaborators, event, &updates);
    }
    debug!(
        "session event channel closed after {} attempts",
        session.attempts().len()
    );
    session
}

fn handle_event(
    session: &mut PracticeSession,
    collaborators: &mut Collaborators,
    event: SessionEvent,
    updates: &Sender<SessionUpdate>,
) {
    match event {
        SessionEvent::SpeakRequested => {
            collaborators
                .synthesizer
                .speak(session.reference(), session.voice());
        }
        SessionEvent::ListenRequested => match collaborators.recognizer.start() {
            Ok(()) => {
                let _ = updates.send(SessionUpdate::Status("Listening...".to_string()));
            }
            Err(err) => {
                warn!("recognizer failed to start: {err}");
                let _ = updates.send(SessionUpdate::Status(err.to_string()));
            }
        },
        SessionEvent::StopRequested => {
            collaborators.recognizer.stop();
            collaborators.recorder.stop();
        }
        SessionEvent::RecordRequested => {
            if let Err(err) = collaborators.recorder.start() {
                warn!("recorder failed to start: {err}");
                let _ = updates.send(SessionUpdate::Status(err.to_string()));
            }
        }
        SessionEvent::TranscriptFinal(transcript) => {
            let attempt = session.score_attempt(&transcript);
            let _ = updates.send(SessionUpdate::AttemptScored(attempt));
        }
        SessionEvent::RecognitionFailed(err) => {
            debug!("recognition failed: {err}");
            let _ = updates.send(SessionUpdate::Status(err.to_string()));
        }
        SessionEvent::ClipCaptured(clip) => {
            session.store_clip(clip);
            let _ = updates.send(SessionUpdate::Status("Recording ready.".to_string()));
        }
        SessionEvent::ReferenceChanged(reference) => {
            session.set_reference(reference);
        }
        SessionEvent::VoiceSelected(voice) => {
            session.select_voice(voice);
        }
    }
}
