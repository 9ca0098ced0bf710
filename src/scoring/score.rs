//! Similarity scoring and feedback tiers
//!
//! Turns an edit distance into the 0-100 score a practice round reports,
//! and maps that score to the feedback line shown to the user.

use serde::{Deserialize, Serialize};

use super::levenshtein::levenshtein;
use super::normalize::normalize_pair;

/// Lowest score reported as [`Feedback::Excellent`].
pub const EXCELLENT_THRESHOLD: u8 = 85;

/// Lowest score reported as [`Feedback::Good`].
pub const GOOD_THRESHOLD: u8 = 60;

/// Score a pronunciation attempt against a reference phrase.
///
/// Both inputs are canonicalized with
/// [`normalize_transcript`](super::normalize::normalize_transcript) first.
/// The score is `round((1 - d / max_len) * 100)` where `d` is the
/// char-level Levenshtein distance between the canonical forms and
/// `max_len` the longer canonical char count. Two inputs that canonicalize
/// to nothing (silence against punctuation, say) count as a perfect match.
///
/// The result is always in `[0, 100]`, symmetric in its arguments, and
/// deterministic. Rounding is half-away-from-zero; on this non-negative
/// range that is ordinary arithmetic rounding.
///
/// # Examples
/// ```
/// use speakscore::scoring::score::score;
///
/// assert_eq!(score("Hello, World!", "hello world"), 100);
/// assert_eq!(score("the quick brown fox", "the quick brown fax"), 95);
/// assert_eq!(score("cat", "dog"), 0);
/// ```
#[must_use]
pub fn score(reference: &str, hypothesis: &str) -> u8 {
    let (nref, nhyp) = normalize_pair(reference, hypothesis);
    score_normalized(&nref, &nhyp)
}

/// Score two already-canonical transcripts.
///
/// Skips normalization; both arguments must come from
/// [`normalize_transcript`](super::normalize::normalize_transcript).
/// Callers comparing one hypothesis against many phrases use this to
/// canonicalize each side exactly once.
#[must_use]
pub fn score_normalized(reference: &str, hypothesis: &str) -> u8 {
    if reference.is_empty() && hypothesis.is_empty() {
        return 100;
    }

    let dist = levenshtein(reference, hypothesis);
    let max_len = reference.chars().count().max(hypothesis.chars().count());

    // max_len > 0 here; one empty side degrades to dist == max_len, score 0
    let raw = (1.0 - dist as f64 / max_len as f64) * 100.0;
    raw.max(0.0).round() as u8
}

/// Feedback tier for a scored attempt.
///
/// Cutoffs are [`EXCELLENT_THRESHOLD`] and [`GOOD_THRESHOLD`]; the
/// `Display` form is the status line shown after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// 85 and up: effectively the right phrase.
    Excellent,
    /// 60 to 84: recognizable, with audible slips.
    Good,
    /// Below 60: worth another round.
    TryAgain,
}

impl Feedback {
    /// Tier for a score in `[0, 100]`.
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Feedback::Excellent
        } else if score >= GOOD_THRESHOLD {
            Feedback::Good
        } else {
            Feedback::TryAgain
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Feedback::Excellent => "Excellent! That was a great match.",
            Feedback::Good => "Good! Close to the reference.",
            Feedback::TryAgain => "Keep practicing: listen again and retry.",
        };
        f.write_str(text)
    }
}
