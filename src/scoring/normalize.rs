//! Transcript canonicalization
//!
//! Recognizer output and reference phrases disagree on casing, punctuation
//! and spacing long before they disagree on words. Every comparison in this
//! crate runs on the canonical form produced here: lowercase, letters and
//! digits only, single-spaced.

/// Canonicalize a transcript for comparison.
///
/// Applies, in order:
/// 1. Unicode lowercasing
/// 2. Removal of every character that is not an ASCII lowercase letter,
///    an ASCII digit, or whitespace
/// 3. Collapse of each whitespace run to a single ASCII space
/// 4. Trim
///
/// The result is either empty or `[a-z0-9]` words separated by single
/// spaces. Total and idempotent; accented letters and punctuation are
/// dropped without leaving a gap, so contractions fuse (`"it's"` becomes
/// `"its"`).
///
/// # Examples
/// ```
/// use speakscore::scoring::normalize::normalize_transcript;
///
/// assert_eq!(normalize_transcript("Hello, World!"), "hello world");
/// assert_eq!(normalize_transcript("It's   a test."), "its a test");
/// assert_eq!(normalize_transcript("  \t\n "), "");
/// ```
#[must_use]
pub fn normalize_transcript(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonicalize both sides of a comparison.
#[must_use]
pub fn normalize_pair(reference: &str, hypothesis: &str) -> (String, String) {
    (normalize_transcript(reference), normalize_transcript(hypothesis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(normalize_transcript("Hello, World!"), "hello world");
        assert_eq!(normalize_transcript("It's a test."), "its a test");
        assert_eq!(normalize_transcript("well... maybe?"), "well maybe");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(normalize_transcript("  the   quick\tbrown\nfox  "), "the quick brown fox");
        assert_eq!(normalize_transcript("   "), "");
        assert_eq!(normalize_transcript(""), "");
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(normalize_transcript("Flight 815 to LAX"), "flight 815 to lax");
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        assert_eq!(normalize_transcript("Café"), "caf");
        assert_eq!(normalize_transcript("naïve résumé"), "nave rsum");
    }

    #[test]
    fn test_symbols_only_becomes_empty() {
        assert_eq!(normalize_transcript("!!! ??? ***"), "");
        assert_eq!(normalize_transcript("_-_-_"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Hello, World!",
            "  It's   a test. ",
            "the quick brown fox",
            "",
            "!!!",
            "Flight 815",
        ];
        for input in inputs {
            let once = normalize_transcript(input);
            assert_eq!(normalize_transcript(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_normalize_pair() {
        let (r, h) = normalize_pair("Hello, World!", "HELLO   world");
        assert_eq!(r, "hello world");
        assert_eq!(h, "hello world");
    }
}
