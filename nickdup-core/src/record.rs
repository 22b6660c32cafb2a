//! Registration records

use serde::{Deserialize, Serialize};

/// One (email, nickname) registration entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Account email, unique per record
    pub email: String,
    /// Display nickname
    pub nickname: String,
}

impl Record {
    /// Create a record from an email and a nickname
    pub fn new<E: Into<String>, N: Into<String>>(email: E, nickname: N) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
        }
    }

    /// Nickname length in characters, not bytes
    pub fn nickname_len(&self) -> usize {
        self.nickname.chars().count()
    }

    /// Whether the nickname is long enough to hold a two-character pattern
    pub fn can_overlap(&self) -> bool {
        self.nickname.chars().nth(1).is_some()
    }
}

impl<E: Into<String>, N: Into<String>> From<(E, N)> for Record {
    fn from((email, nickname): (E, N)) -> Self {
        Record::new(email, nickname)
    }
}
