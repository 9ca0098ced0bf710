//! Shared-session wrapper for hosts without an event loop
//!
//! `parking_lot::RwLock` around a [`PracticeSession`], for hosts where the
//! recognizer callback and the UI run on different threads and both reach
//! the session directly. Reads (scores, history) take the shared lock;
//! scoring and state changes take the exclusive one. Clones share one
//! session.

use parking_lot::RwLock;
use std::sync::Arc;

use super::collaborators::VoiceId;
use super::{Attempt, PracticeSession};

/// Thread-safe handle to a [`PracticeSession`].
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<PracticeSession>>,
}

impl SharedSession {
    /// Wrap a session for shared access.
    #[must_use]
    pub fn new(session: PracticeSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Score a transcript and return the record.
    ///
    /// Acquires the exclusive write lock.
    pub fn score_attempt(&self, transcript: &str) -> Attempt {
        self.inner.write().score_attempt(transcript)
    }

    /// Acquires the exclusive write lock.
    pub fn set_reference(&self, reference: impl Into<String>) {
        self.inner.write().set_reference(reference);
    }

    /// Acquires the exclusive write lock.
    pub fn select_voice(&self, voice: Option<VoiceId>) {
        self.inner.write().select_voice(voice);
    }

    /// Acquires a shared read lock.
    #[must_use]
    pub fn reference(&self) -> String {
        self.inner.read().reference().to_string()
    }

    /// Acquires a shared read lock.
    #[must_use]
    pub fn best_score(&self) -> Option<u8> {
        self.inner.read().best_score()
    }

    /// Acquires a shared read lock.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.inner.read().attempts().len()
    }

    /// Acquires a shared read lock.
    #[must_use]
    pub fn trouble_words(&self) -> Vec<(String, usize)> {
        self.inner.read().trouble_words()
    }

    /// Run `f` against the locked session for anything not covered above.
    ///
    /// Holds the shared read lock for the duration of `f`.
    pub fn with_session<R>(&self, f: impl FnOnce(&PracticeSession) -> R) -> R {
        f(&self.inner.read())
    }
}
