//! Ranking a transcript against a phrase list
//!
//! Practice decks come as phrase lists; after a round it is useful to know
//! which phrase an attempt actually matched best. Lists are scored
//! sequentially below [`PARALLEL_THRESHOLD`] and on the rayon pool at or
//! above it, with identical results either way.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::normalize::normalize_transcript;
use super::score::score_normalized;

/// Minimum list length before scoring fans out to the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 100;

/// One phrase scored against a hypothesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    /// Position of the phrase in the input list.
    pub index: usize,
    /// The phrase as given, not canonicalized.
    pub phrase: String,
    pub score: u8,
}

/// Score a hypothesis against every phrase in a list.
///
/// Returns matches in descending score order; equal scores keep the list
/// order. The hypothesis is canonicalized once, each phrase once.
///
/// # Examples
/// ```
/// use speakscore::scoring::batch::rank_phrases;
///
/// let phrases = vec![
///     "The quick brown fox jumps over the lazy dog".to_string(),
///     "She sells seashells by the seashore".to_string(),
/// ];
/// let ranked = rank_phrases(&phrases, "she sells sea shells by the sea shore");
/// assert_eq!(ranked[0].index, 1);
/// ```
#[must_use]
pub fn rank_phrases(phrases: &[String], hypothesis: &str) -> Vec<PhraseMatch> {
    let nhyp = normalize_transcript(hypothesis);

    let score_one = |(index, phrase): (usize, &String)| PhraseMatch {
        index,
        phrase: phrase.clone(),
        score: score_normalized(&normalize_transcript(phrase), &nhyp),
    };

    let mut matches: Vec<PhraseMatch> = if phrases.len() >= PARALLEL_THRESHOLD {
        phrases.par_iter().enumerate().map(score_one).collect()
    } else {
        phrases.iter().enumerate().map(score_one).collect()
    };

    // Stable sort keeps input order among equal scores
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Highest-scoring phrase for a hypothesis, if the list is non-empty.
#[must_use]
pub fn best_phrase(phrases: &[String], hypothesis: &str) -> Option<PhraseMatch> {
    rank_phrases(phrases, hypothesis).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Vec<String> {
        [
            "The quick brown fox jumps over the lazy dog",
            "She sells seashells by the seashore",
            "Peter Piper picked a peck of pickled peppers",
            "How much wood would a woodchuck chuck",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_rank_orders_descending() {
        let ranked = rank_phrases(&deck(), "she sells seashells by the seashore");
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[0].score, 100);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_rank_keeps_input_order_on_ties() {
        let phrases = vec!["cat".to_string(), "dog".to_string(), "cat".to_string()];
        let ranked = rank_phrases(&phrases, "cat");
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 2);
        assert_eq!(ranked[2].index, 1);
    }

    #[test]
    fn test_best_phrase() {
        let best = best_phrase(&deck(), "peter piper picked a peck of pickled peppers");
        let best = best.expect("non-empty deck");
        assert_eq!(best.index, 2);
        assert_eq!(best.score, 100);

        assert_eq!(best_phrase(&[], "anything"), None);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        // Enough phrases to cross the rayon threshold, one planted near-match
        let mut phrases: Vec<String> = (0..PARALLEL_THRESHOLD + 20)
            .map(|i| format!("filler phrase number {i}"))
            .collect();
        phrases[57] = "the quick brown fox".to_string();

        let ranked = rank_phrases(&phrases, "the quick brown fax");
        assert_eq!(ranked[0].index, 57);
        assert_eq!(ranked[0].score, 95);

        // Same query on a short slice takes the sequential path
        let short = vec![phrases[57].clone()];
        assert_eq!(rank_phrases(&short, "the quick brown fax")[0].score, 95);
    }
}
