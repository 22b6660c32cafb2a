//! Discovery of two-character patterns shared between nicknames
//!
//! Only patterns of length 2 are tracked. Any common substring of length
//! three or more contains a common substring of length two, so checking
//! pairs is enough to decide whether two nicknames overlap.

use crate::record::Record;
use std::collections::HashSet;
use std::fmt;

/// A contiguous two-character substring of a nickname
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bigram([char; 2]);

impl Bigram {
    /// Create a bigram from two characters
    pub fn new(first: char, second: char) -> Self {
        Self([first, second])
    }

    /// The two characters, in order
    pub fn chars(&self) -> &[char; 2] {
        &self.0
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// Distinct bigrams of a single nickname
///
/// A nickname of `n >= 2` characters has `n - 1` windows; repeats inside the
/// same nickname collapse into one entry. Shorter nicknames yield nothing.
pub fn bigrams(nickname: &str) -> HashSet<Bigram> {
    let chars: Vec<char> = nickname.chars().collect();
    chars
        .windows(2)
        .map(|pair| Bigram::new(pair[0], pair[1]))
        .collect()
}

/// Incremental scanner collecting bigrams that recur across nicknames
///
/// A bigram becomes shared when a nickname contributes it after an earlier
/// nickname already did. A bigram repeated only within one nickname is not
/// shared.
#[derive(Debug, Default, Clone)]
pub struct PatternFinder {
    all_patterns: HashSet<Bigram>,
    shared_patterns: HashSet<Bigram>,
}

impl PatternFinder {
    /// Create an empty finder
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one nickname
    pub fn observe(&mut self, nickname: &str) {
        for pattern in bigrams(nickname) {
            if !self.all_patterns.insert(pattern) {
                self.shared_patterns.insert(pattern);
            }
        }
    }

    /// Feed every nickname of `records`, in order
    pub fn observe_records(&mut self, records: &[Record]) {
        for record in records {
            if record.can_overlap() {
                self.observe(&record.nickname);
            }
        }
    }

    /// Every bigram seen so far
    pub fn all_patterns(&self) -> &HashSet<Bigram> {
        &self.all_patterns
    }

    /// Bigrams seen in more than one nickname so far
    pub fn shared_patterns(&self) -> &HashSet<Bigram> {
        &self.shared_patterns
    }

    /// Consume the finder, keeping only the shared bigrams
    pub fn into_shared(self) -> HashSet<Bigram> {
        self.shared_patterns
    }
}

/// Bigrams that occur in the nicknames of at least two records
pub fn find_shared_patterns(records: &[Record]) -> HashSet<Bigram> {
    let mut finder = PatternFinder::new();
    finder.observe_records(records);

    log::debug!(
        "{} distinct bigrams, {} shared",
        finder.all_patterns().len(),
        finder.shared_patterns().len()
    );

    finder.into_shared()
}
