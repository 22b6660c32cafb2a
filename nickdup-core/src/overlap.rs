//! Matching shared patterns back to the records that contain them

use crate::matcher::KmpMatcher;
use crate::pattern::Bigram;
use crate::record::Record;
use std::collections::HashSet;

/// Finds the records whose nickname contains at least one shared pattern
///
/// Nicknames are decoded to characters once, on construction, and reused for
/// every pattern.
#[derive(Debug)]
pub struct OverlapMatcher<'a> {
    records: &'a [Record],
    nicknames: Vec<Vec<char>>,
}

impl<'a> OverlapMatcher<'a> {
    /// Prepare `records` for repeated scanning
    pub fn new(records: &'a [Record]) -> Self {
        let nicknames = records
            .iter()
            .map(|record| record.nickname.chars().collect())
            .collect();
        Self { records, nicknames }
    }

    /// Emails of the records whose nickname contains `pattern`
    ///
    /// Single-character nicknames are never scanned.
    pub fn emails_matching<'m>(
        &'m self,
        matcher: &'m KmpMatcher<char>,
    ) -> impl Iterator<Item = &'a str> + 'm {
        self.records
            .iter()
            .zip(&self.nicknames)
            .filter(|(_, nickname)| nickname.len() > 1)
            .filter(move |(_, nickname)| matcher.is_match(nickname))
            .map(|(record, _)| record.email.as_str())
    }

    /// Emails of every record containing any of `patterns`
    pub fn collect_emails<'p, I>(&self, patterns: I) -> HashSet<String>
    where
        I: IntoIterator<Item = &'p Bigram>,
    {
        let mut emails = HashSet::new();
        for pattern in patterns {
            let matcher = KmpMatcher::new(pattern.chars().to_vec());
            for email in self.emails_matching(&matcher) {
                if emails.insert(email.to_string()) {
                    log::trace!("'{email}' matches shared pattern '{pattern}'");
                }
            }
        }
        emails
    }
}

/// Emails of every record whose nickname contains one of `shared`
pub fn find_overlap_emails(shared: &HashSet<Bigram>, records: &[Record]) -> HashSet<String> {
    let emails = OverlapMatcher::new(records).collect_emails(shared);
    log::debug!(
        "{} of {} records overlap on {} shared patterns",
        emails.len(),
        records.len(),
        shared.len()
    );
    emails
}
