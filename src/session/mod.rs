//! Practice session state
//!
//! One object owns what a practice UI needs to track between rounds: the
//! reference phrase, the chosen voice, the scored attempts and the last
//! captured clip. Hosts mutate it directly, share it through
//! [`SharedSession`], or drive it from a channel with [`run_session`].

pub mod collaborators;
pub mod events;
pub mod shared;

pub use collaborators::{
    AudioClip, ClipRecorder, RecognitionError, SpeechRecognizer, SpeechSynthesizer, VoiceId,
};
pub use events::{run_session, Collaborators, SessionEvent, SessionUpdate};
pub use shared::SharedSession;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::scoring::align::{align_words_normalized, AlignmentSummary, WordDiff, WordOp};
use crate::scoring::normalize::normalize_transcript;
use crate::scoring::score::{score_normalized, Feedback};

/// One scored pronunciation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Transcript exactly as the recognizer produced it.
    pub transcript: String,
    /// Canonical form actually compared.
    pub normalized: String,
    pub score: u8,
    pub feedback: Feedback,
    /// Word-by-word alignment against the reference.
    pub diffs: Vec<WordDiff>,
    pub summary: AlignmentSummary,
}

/// State for one practice session.
///
/// Attempts are always relative to the current reference phrase; switching
/// phrases starts the history over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeSession {
    reference: String,
    normalized_reference: String,
    voice: Option<VoiceId>,
    attempts: Vec<Attempt>,
    /// Clips are transient and stay out of serialized snapshots.
    #[serde(skip)]
    last_clip: Option<AudioClip>,
}

impl PracticeSession {
    /// New session around a reference phrase.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let normalized_reference = normalize_transcript(&reference);
        Self {
            reference,
            normalized_reference,
            voice: None,
            attempts: Vec::new(),
            last_clip: None,
        }
    }

    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Canonical form of the reference phrase.
    #[must_use]
    pub fn normalized_reference(&self) -> &str {
        &self.normalized_reference
    }

    /// Switch to a new reference phrase.
    ///
    /// Attempt history and any held clip belong to the old phrase and are
    /// cleared.
    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = reference.into();
        self.normalized_reference = normalize_transcript(&self.reference);
        self.attempts.clear();
        self.last_clip = None;
        debug!("reference changed to {:?}", self.reference);
    }

    pub fn select_voice(&mut self, voice: Option<VoiceId>) {
        self.voice = voice;
    }

    #[must_use]
    pub fn voice(&self) -> Option<&VoiceId> {
        self.voice.as_ref()
    }

    /// Score a final transcript against the reference and record it.
    ///
    /// Returns the stored record; [`attempts`](Self::attempts) keeps the
    /// full history in order.
    pub fn score_attempt(&mut self, transcript: &str) -> Attempt {
        let normalized = normalize_transcript(transcript);
        let score = score_normalized(&self.normalized_reference, &normalized);
        let feedback = Feedback::for_score(score);
        let diffs = align_words_normalized(&self.normalized_reference, &normalized);
        let summary = AlignmentSummary::from_diffs(&diffs);
        debug!("attempt scored {score} against {:?}", self.reference);

        let attempt = Attempt {
            transcript: transcript.to_string(),
            normalized,
            score,
            feedback,
            diffs,
            summary,
        };
        self.attempts.push(attempt.clone());
        attempt
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Best score so far against the current reference.
    #[must_use]
    pub fn best_score(&self) -> Option<u8> {
        self.attempts.iter().map(|a| a.score).max()
    }

    pub fn clear_attempts(&mut self) {
        self.attempts.clear();
    }

    /// Hold a captured clip for the host to retrieve.
    pub fn store_clip(&mut self, clip: AudioClip) {
        self.last_clip = Some(clip);
    }

    #[must_use]
    pub fn last_clip(&self) -> Option<&AudioClip> {
        self.last_clip.as_ref()
    }

    /// Reference words the user keeps missing, worst first.
    ///
    /// Counts substitutions and deletions against each reference word
    /// across the attempt history; ties sort alphabetically.
    #[must_use]
    pub fn trouble_words(&self) -> Vec<(String, usize)> {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for attempt in &self.attempts {
            for diff in &attempt.diffs {
                if matches!(diff.op, WordOp::Substitution | WordOp::Deletion) {
                    if let Some(word) = diff.reference.as_deref() {
                        *counts.entry(word).or_insert(0) += 1;
                    }
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_attempt_records_everything() {
        let mut session = PracticeSession::new("The quick brown fox");
        let attempt = session.score_attempt("the quick brown fax");

        assert_eq!(attempt.score, 95);
        assert_eq!(attempt.feedback, Feedback::Excellent);
        assert_eq!(attempt.transcript, "the quick brown fax");
        assert_eq!(attempt.normalized, "the quick brown fax");
        assert_eq!(attempt.summary.substitutions, 1);
        assert_eq!(attempt.summary.matches, 3);

        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.last_attempt(), Some(&attempt));
    }

    #[test]
    fn test_set_reference_clears_history() {
        let mut session = PracticeSession::new("hello world");
        session.score_attempt("hello world");
        session.store_clip(AudioClip {
            bytes: vec![1, 2, 3],
            mime_type: "audio/webm".to_string(),
        });

        session.set_reference("a different phrase");
        assert_eq!(session.reference(), "a different phrase");
        assert!(session.attempts().is_empty());
        assert!(session.last_clip().is_none());
    }

    #[test]
    fn test_best_score_tracks_maximum() {
        let mut session = PracticeSession::new("she sells seashells");
        assert_eq!(session.best_score(), None);

        session.score_attempt("he sails seashells");
        session.score_attempt("she sells seashells");
        session.score_attempt("sea shells");
        assert_eq!(session.best_score(), Some(100));
    }

    #[test]
    fn test_voice_selection() {
        let mut session = PracticeSession::new("hello");
        assert!(session.voice().is_none());

        session.select_voice(Some(VoiceId::new("en-US-1")));
        assert_eq!(session.voice().map(VoiceId::as_str), Some("en-US-1"));

        session.select_voice(None);
        assert!(session.voice().is_none());
    }

    #[test]
    fn test_trouble_words_ranked_by_miss_count() {
        let mut session = PracticeSession::new("the quick brown fox");
        session.score_attempt("the brown fox"); // drops "quick"
        session.score_attempt("the kwik brown fox"); // mangles "quick"
        session.score_attempt("the quick brown box"); // mangles "fox"

        let trouble = session.trouble_words();
        assert_eq!(trouble[0], ("quick".to_string(), 2));
        assert_eq!(trouble[1], ("fox".to_string(), 1));
    }

    #[test]
    fn test_trouble_words_ties_sort_alphabetically() {
        let mut session = PracticeSession::new("alpha beta");
        session.score_attempt("zzz zzz");

        let trouble = session.trouble_words();
        assert_eq!(trouble[0].0, "alpha");
        assert_eq!(trouble[1].0, "beta");
    }

    #[test]
    fn test_session_snapshot_roundtrips_without_clip() {
        let mut session = PracticeSession::new("hello world");
        session.score_attempt("hello word");
        session.store_clip(AudioClip {
            bytes: vec![0xde, 0xad],
            mime_type: "audio/webm".to_string(),
        });

        let json = serde_json::to_string(&session).expect("serialize");
        let restored: PracticeSession = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored.reference(), "hello world");
        assert_eq!(restored.attempts().len(), 1);
        assert_eq!(restored.attempts()[0].score, session.attempts()[0].score);
        assert!(restored.last_clip().is_none());
    }
}
