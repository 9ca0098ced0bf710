//! Transcript scoring: canonicalization, edit distance, similarity and
//! word-level diagnostics
//!
//! - [`normalize`]: the canonical transcript form every comparison shares
//! - [`levenshtein`]: unit-cost edit distance, char and token level
//! - [`score`]: the 0-100 similarity score and feedback tiers
//! - [`align`]: word alignment and error-rate breakdowns
//! - [`batch`]: ranking an attempt against a phrase list

pub mod align;
pub mod batch;
pub mod levenshtein;
pub mod normalize;
pub mod score;

pub use align::*;
pub use batch::*;
pub use levenshtein::*;
pub use normalize::*;
pub use score::*;
