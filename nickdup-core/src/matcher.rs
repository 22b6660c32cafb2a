//! Prefix-function (Knuth–Morris–Pratt) exact matcher
//!
//! The matcher works on slices of any comparable element. Nicknames are
//! matched as `&[char]` so that a Hangul syllable is one unit, never three
//! UTF-8 bytes.
//!
//! # Example
//!
//! ```rust
//! use nickdup_core::matcher::{build_failure_table, search};
//!
//! let pattern: Vec<char> = "나다".chars().collect();
//! let table = build_failure_table(&pattern);
//! let text: Vec<char> = "가나다라".chars().collect();
//!
//! assert!(search(&text, &pattern, &table));
//! ```

/// Build the failure table of `pattern`
///
/// `table[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. `table[0]` is always 0, and an empty pattern
/// yields an empty table.
pub fn build_failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];

    let mut count = 0;
    for (i, item) in pattern.iter().enumerate().skip(1) {
        while count > 0 && *item != pattern[count] {
            count = table[count - 1];
        }
        if *item == pattern[count] {
            count += 1;
        }
        table[i] = count;
    }

    table
}

/// Position of the first occurrence of `pattern` in `text`
///
/// `table` must come from [`build_failure_table`] for the same pattern.
/// Runs in `O(text.len())`. An empty pattern matches at position 0.
///
/// # Panics
///
/// Panics if `table.len()` differs from `pattern.len()`.
pub fn find<T: PartialEq>(text: &[T], pattern: &[T], table: &[usize]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    assert_eq!(
        table.len(),
        pattern.len(),
        "failure table length does not match the pattern"
    );

    let mut count = 0;
    for (i, item) in text.iter().enumerate() {
        while count > 0 && *item != pattern[count] {
            count = table[count - 1];
        }
        if *item == pattern[count] {
            count += 1;
            if count == pattern.len() {
                return Some(i + 1 - count);
            }
        }
    }

    None
}

/// Whether `pattern` occurs contiguously in `text`
///
/// # Panics
///
/// Panics under the same condition as [`find`].
pub fn search<T: PartialEq>(text: &[T], pattern: &[T], table: &[usize]) -> bool {
    find(text, pattern, table).is_some()
}

/// A pattern paired with its precomputed failure table
///
/// Building the table once and reusing it across many texts is the intended
/// usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmpMatcher<T> {
    pattern: Vec<T>,
    table: Vec<usize>,
}

impl<T: PartialEq> KmpMatcher<T> {
    /// Precompute the failure table for `pattern`
    pub fn new(pattern: Vec<T>) -> Self {
        let table = build_failure_table(&pattern);
        Self { pattern, table }
    }

    /// The pattern being searched for
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// The precomputed failure table
    pub fn table(&self) -> &[usize] {
        &self.table
    }

    /// Whether the pattern occurs in `text`
    pub fn is_match(&self, text: &[T]) -> bool {
        search(text, &self.pattern, &self.table)
    }

    /// Position of the first occurrence in `text`
    pub fn find(&self, text: &[T]) -> Option<usize> {
        find(text, &self.pattern, &self.table)
    }
}

impl KmpMatcher<char> {
    /// Matcher over the characters of `pattern`
    pub fn from_str_chars(pattern: &str) -> Self {
        Self::new(pattern.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_failure_table_classic() {
        assert_eq!(build_failure_table(b"ABABCABAB"), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
        assert_eq!(build_failure_table(b"AABAAA"), vec![0, 1, 0, 1, 2, 2]);
        assert_eq!(build_failure_table(b"ABCD"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_failure_table_two_syllables() {
        assert_eq!(build_failure_table(&chars("가나")), vec![0, 0]);
        assert_eq!(build_failure_table(&chars("가가")), vec![0, 1]);
    }

    #[test]
    fn test_failure_table_empty_and_single() {
        assert!(build_failure_table::<char>(&[]).is_empty());
        assert_eq!(build_failure_table(&chars("가")), vec![0]);
    }

    #[test]
    #[should_panic(expected = "failure table length does not match the pattern")]
    fn test_find_rejects_table_of_other_pattern() {
        let table = build_failure_table(&chars("가나다"));
        find(&chars("가나다라"), &chars("가나"), &table);
    }

    #[test]
    fn test_search_hangul() {
        let pattern = chars("나다");
        let table = build_failure_table(&pattern);

        assert!(search(&chars("가나다"), &pattern, &table));
        assert!(search(&chars("나다"), &pattern, &table));
        assert!(!search(&chars("다나"), &pattern, &table));
        assert!(!search(&chars("나"), &pattern, &table));
        assert!(!search(&[], &pattern, &table));
    }

    #[test]
    fn test_search_needs_fallback() {
        // "가가나" inside "가가가나": the first attempt fails on the third
        // character and must resume from the table, not from scratch.
        let pattern = chars("가가나");
        let table = build_failure_table(&pattern);
        assert_eq!(find(&chars("가가가나"), &pattern, &table), Some(1));
    }

    #[test]
    fn test_find_positions() {
        let pattern = b"ABAB";
        let table = build_failure_table(pattern);
        assert_eq!(find(b"ABABAB", pattern, &table), Some(0));
        assert_eq!(find(b"ABCABABX", pattern, &table), Some(3));
        assert_eq!(find(b"ABACABA", pattern, &table), None);
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let table = build_failure_table::<u8>(&[]);
        assert!(search(b"", &[], &table));
        assert_eq!(find(b"abc", &[], &table), Some(0));
    }

    #[test]
    fn test_matcher_reuse() {
        let matcher = KmpMatcher::from_str_chars("제이");
        assert_eq!(matcher.table(), &[0, 0]);
        assert_eq!(matcher.pattern(), &['제', '이']);

        assert!(matcher.is_match(&chars("제이엠")));
        assert!(matcher.is_match(&chars("엠제이")));
        assert!(!matcher.is_match(&chars("이제엠")));
        assert_eq!(matcher.find(&chars("엠제이")), Some(1));
    }

    #[test]
    fn test_matches_agree_with_windows() {
        let text = chars("가나가나다가나다라");
        for pattern in ["가나", "나다라", "다가나다", "라가", "가나다라마"] {
            let pattern = chars(pattern);
            let table = build_failure_table(&pattern);
            let expected = text.windows(pattern.len()).any(|w| w == pattern.as_slice());
            assert_eq!(search(&text, &pattern, &table), expected);
        }
    }
}
