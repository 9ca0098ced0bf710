//! Browser bindings
//!
//! A thin wasm surface over the scorer for pages hosting the practice UI.
//! Strings in, numbers or JSON out; no state lives on this side of the
//! boundary.

use wasm_bindgen::prelude::*;

use crate::scoring::align::{align_words, AlignmentSummary};
use crate::scoring::score::{score, Feedback};

/// Score a pronunciation attempt; see [`score`](crate::scoring::score::score).
#[wasm_bindgen]
#[must_use]
pub fn score_attempt(reference: &str, hypothesis: &str) -> u8 {
    score(reference, hypothesis)
}

/// Full attempt report as a JSON string:
/// `{"score": .., "feedback": "..", "diffs": [..], "summary": {..}}`.
#[wasm_bindgen]
#[must_use]
pub fn attempt_report(reference: &str, hypothesis: &str) -> String {
    let attempt_score = score(reference, hypothesis);
    let diffs = align_words(reference, hypothesis);
    let report = serde_json::json!({
        "score": attempt_score,
        "feedback": Feedback::for_score(attempt_score).to_string(),
        "diffs": diffs,
        "summary": AlignmentSummary::from_diffs(&diffs),
    });
    serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string())
}
