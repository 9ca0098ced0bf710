//! Levenshtein (edit) distance
//!
//! The classic unit-cost dynamic program, in two shapes: a char-level
//! distance for transcript text and a generic slice distance reused for
//! word-level metrics. Single-row storage keeps space at O(min(m, n));
//! transcripts are short enough that the row usually stays on the stack.

use smallvec::SmallVec;

/// Levenshtein distance between two strings, counted in `char`s.
///
/// Unit cost for insertion, deletion and substitution. The distance is
/// symmetric, zero exactly for equal strings, and never exceeds the longer
/// string's char count.
///
/// # Examples
/// ```
/// use speakscore::scoring::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("fox", "fax"), 1);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    dp_distance(&a_chars, &b_chars)
}

/// Single-row DP over char slices.
fn dp_distance(a: &[char], b: &[char]) -> usize {
    // Ensure the shorter string is on the column axis
    let (target, source) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for j in 0..n_target {
            let cost = if sc == target[j] { 0 } else { 1 };
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

/// Levenshtein distance over arbitrary equatable slices.
///
/// The same recurrence as [`levenshtein`], one unit per element. Used for
/// word-level distances, where the elements are tokens instead of chars.
///
/// # Examples
/// ```
/// use speakscore::scoring::levenshtein::levenshtein_generic;
///
/// let said: Vec<&str> = "the quick brown fox".split(' ').collect();
/// let heard: Vec<&str> = "the brown fox".split(' ').collect();
/// assert_eq!(levenshtein_generic(&said, &heard), 1);
/// ```
#[must_use]
pub fn levenshtein_generic<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: SmallVec<[usize; 128]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 128]> = SmallVec::with_capacity(n + 1);

    for i in 1..=m {
        curr.clear();
        curr.push(i);

        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let val = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
            curr.push(val);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("über", "uber"), 1);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        let pairs = [
            ("the quick brown fox", "the quick brown fax"),
            ("hello world", "helo wrld"),
            ("", "something"),
            ("a", "b"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a), "asymmetric for {a:?} / {b:?}");
        }
    }

    #[test]
    fn test_levenshtein_bounded_by_longer_side() {
        let pairs = [("cat", "dog"), ("short", "a much longer phrase"), ("", "x")];
        for (a, b) in pairs {
            let max_len = a.chars().count().max(b.chars().count());
            assert!(levenshtein(a, b) <= max_len);
        }
    }

    #[test]
    fn test_levenshtein_long_strings_leave_the_stack() {
        // Past the inline row capacity the SmallVec spills to the heap
        let a = "a".repeat(200);
        let b = format!("{}b", "a".repeat(200));
        assert_eq!(levenshtein(&a, &b), 1);
    }

    #[test]
    fn test_generic_over_words() {
        let a = ["the", "quick", "brown", "fox"];
        let b = ["the", "quick", "brown", "fax"];
        assert_eq!(levenshtein_generic(&a, &b), 1);

        let c = ["quick", "brown", "fox", "jumps"];
        assert_eq!(levenshtein_generic(&a, &c), 2);

        let empty: [&str; 0] = [];
        assert_eq!(levenshtein_generic(&a, &empty), 4);
        assert_eq!(levenshtein_generic(&empty, &empty), 0);
    }

    #[test]
    fn test_generic_matches_char_level() {
        let a: Vec<char> = "kitten".chars().collect();
        let b: Vec<char> = "sitting".chars().collect();
        assert_eq!(levenshtein_generic(&a, &b), levenshtein("kitten", "sitting"));
    }
}
