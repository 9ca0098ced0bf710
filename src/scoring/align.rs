//! Word-level alignment and error-rate diagnostics
//!
//! The score says how close an attempt was; the alignment says where it
//! went wrong. Reference and hypothesis are canonicalized, split into
//! words, and aligned with the same unit-cost recurrence the char-level
//! distance uses, full matrix plus backtrack so the ops come out in
//! reference order.

use serde::{Deserialize, Serialize};

use super::levenshtein::levenshtein_generic;
use super::normalize::normalize_pair;

/// Edit operation relating a reference word to a hypothesis word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordOp {
    /// Words agree.
    Match,
    /// Hypothesis word replaces the reference word.
    Substitution,
    /// Hypothesis word with no reference counterpart.
    Insertion,
    /// Reference word missing from the hypothesis.
    Deletion,
}

/// One aligned word pair (or unpaired word) from [`align_words`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    pub op: WordOp,
    /// Reference word; `None` for insertions.
    pub reference: Option<String>,
    /// Hypothesis word; `None` for deletions.
    pub hypothesis: Option<String>,
}

/// Op counts over one alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSummary {
    pub matches: usize,
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl AlignmentSummary {
    /// Tally the ops of an alignment.
    #[must_use]
    pub fn from_diffs(diffs: &[WordDiff]) -> Self {
        let mut summary = Self::default();
        for diff in diffs {
            match diff.op {
                WordOp::Match => summary.matches += 1,
                WordOp::Substitution => summary.substitutions += 1,
                WordOp::Insertion => summary.insertions += 1,
                WordOp::Deletion => summary.deletions += 1,
            }
        }
        summary
    }

    /// Reference word count implied by the alignment.
    #[must_use]
    pub fn reference_words(&self) -> usize {
        self.matches + self.substitutions + self.deletions
    }

    /// Word error rate for this alignment; see [`word_error_rate`].
    #[must_use]
    pub fn word_error_rate(&self) -> f64 {
        let errors = self.substitutions + self.insertions + self.deletions;
        let refs = self.reference_words();
        if refs == 0 {
            return if errors == 0 { 0.0 } else { 1.0 };
        }
        errors as f64 / refs as f64
    }
}

/// Align reference and hypothesis word by word.
///
/// Inputs are canonicalized first. The result is in reference order:
/// matches and substitutions pair words up, deletions mark reference words
/// the hypothesis dropped, insertions mark extra hypothesis words.
/// Equal-cost paths prefer pairing words over a delete-insert split.
///
/// # Examples
/// ```
/// use speakscore::scoring::align::{align_words, WordOp};
///
/// let diffs = align_words("the quick brown fox", "the brown fax");
/// let ops: Vec<WordOp> = diffs.iter().map(|d| d.op).collect();
/// assert_eq!(
///     ops,
///     [WordOp::Match, WordOp::Deletion, WordOp::Match, WordOp::Substitution]
/// );
/// ```
#[must_use]
pub fn align_words(reference: &str, hypothesis: &str) -> Vec<WordDiff> {
    let (nref, nhyp) = normalize_pair(reference, hypothesis);
    align_words_normalized(&nref, &nhyp)
}

/// Align two already-canonical transcripts; see [`align_words`].
#[must_use]
pub fn align_words_normalized(reference: &str, hypothesis: &str) -> Vec<WordDiff> {
    let ref_words: Vec<&str> = reference.split_whitespace().collect();
    let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();
    align_tokens(&ref_words, &hyp_words)
}

fn align_tokens(ref_words: &[&str], hyp_words: &[&str]) -> Vec<WordDiff> {
    let m = ref_words.len();
    let n = hyp_words.len();
    let cols = n + 1;

    // Full matrix so the op sequence can be recovered afterwards
    let mut dp = vec![0usize; (m + 1) * cols];
    for i in 0..=m {
        dp[i * cols] = i;
    }
    for j in 0..=n {
        dp[j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(ref_words[i - 1] != hyp_words[j - 1]);
            dp[i * cols + j] = (dp[(i - 1) * cols + j] + 1)
                .min(dp[i * cols + j - 1] + 1)
                .min(dp[(i - 1) * cols + j - 1] + cost);
        }
    }

    // Backtrack from the far corner, diagonal first so equal-cost paths
    // pair words instead of splitting into delete plus insert
    let mut diffs = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let cost = usize::from(ref_words[i - 1] != hyp_words[j - 1]);
            if dp[i * cols + j] == dp[(i - 1) * cols + j - 1] + cost {
                let op = if cost == 0 { WordOp::Match } else { WordOp::Substitution };
                diffs.push(WordDiff {
                    op,
                    reference: Some(ref_words[i - 1].to_string()),
                    hypothesis: Some(hyp_words[j - 1].to_string()),
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && dp[i * cols + j] == dp[(i - 1) * cols + j] + 1 {
            diffs.push(WordDiff {
                op: WordOp::Deletion,
                reference: Some(ref_words[i - 1].to_string()),
                hypothesis: None,
            });
            i -= 1;
        } else {
            diffs.push(WordDiff {
                op: WordOp::Insertion,
                reference: None,
                hypothesis: Some(hyp_words[j - 1].to_string()),
            });
            j -= 1;
        }
    }
    diffs.reverse();
    diffs
}

/// Word error rate of a hypothesis against a reference.
///
/// Word-level Levenshtein distance over canonical tokens, divided by the
/// reference word count. Empty reference and hypothesis rate 0.0; an empty
/// reference against a non-empty hypothesis rates 1.0. Values above 1.0
/// are possible when the hypothesis runs long.
///
/// # Examples
/// ```
/// use speakscore::scoring::align::word_error_rate;
///
/// let wer = word_error_rate("the quick brown fox", "the quick brown fax");
/// assert!((wer - 0.25).abs() < 1e-9);
/// ```
#[must_use]
pub fn word_error_rate(reference: &str, hypothesis: &str) -> f64 {
    let (nref, nhyp) = normalize_pair(reference, hypothesis);
    let ref_words: Vec<&str> = nref.split_whitespace().collect();
    let hyp_words: Vec<&str> = nhyp.split_whitespace().collect();

    if ref_words.is_empty() {
        return if hyp_words.is_empty() { 0.0 } else { 1.0 };
    }

    levenshtein_generic(&ref_words, &hyp_words) as f64 / ref_words.len() as f64
}
