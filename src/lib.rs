//! speakscore: pronunciation-practice transcript scoring
//!
//! The user hears a reference phrase, says it back, and a speech
//! recognizer turns the attempt into text. This crate owns everything
//! after that: canonicalizing both transcripts, measuring how far apart
//! they are, and turning the distance into the score and feedback a
//! practice UI shows.
//!
//! # Features
//!
//! - Canonical transcript form: lowercase, letters and digits, single-spaced
//! - Char-level Levenshtein distance (single-row DP) and a 0-100 score
//! - Word alignment, error-rate summaries and per-word trouble tracking
//! - Phrase-list ranking, parallel above a size threshold
//! - A host-agnostic practice session: state object, collaborator traits
//!   for synthesis/recognition/capture, channel-driven event loop
//! - Optional browser bindings behind the `wasm` feature
//!
//! # Quick start
//!
//! ```
//! use speakscore::{score, Feedback};
//!
//! let s = score("The quick brown fox", "the quick brown fax");
//! assert_eq!(s, 95);
//! assert_eq!(Feedback::for_score(s), Feedback::Excellent);
//! ```
//!
//! Scoring is pure and total; nothing here touches a speech API. Hosts
//! wire their synthesizer and recognizer in through the [`session`] layer
//! and deliver results as [`session::SessionEvent`]s.

pub mod scoring;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use scoring::align::{
    align_words, align_words_normalized, word_error_rate, AlignmentSummary, WordDiff, WordOp,
};
pub use scoring::batch::{best_phrase, rank_phrases, PhraseMatch, PARALLEL_THRESHOLD};
pub use scoring::levenshtein::{levenshtein, levenshtein_generic};
pub use scoring::normalize::{normalize_pair, normalize_transcript};
pub use scoring::score::{score, score_normalized, Feedback, EXCELLENT_THRESHOLD, GOOD_THRESHOLD};
pub use session::{
    run_session, Attempt, AudioClip, ClipRecorder, Collaborators, PracticeSession,
    RecognitionError, SessionEvent, SessionUpdate, SharedSession, SpeechRecognizer,
    SpeechSynthesizer, VoiceId,
};
