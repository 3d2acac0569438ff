//! The person entity.

use crate::PersonId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored person record.
///
/// Created exactly once at save time and never mutated or deleted afterwards.
/// The `search` blob is derived from the other fields at creation and stored
/// alongside the record for substring matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Unique identifier, server-generated, immutable once assigned.
    pub id: PersonId,
    /// Nickname, 0-32 characters, not numeric-parseable.
    pub nickname: String,
    /// Full name, 0-100 characters, not numeric-parseable.
    pub name: String,
    /// Calendar date of birth.
    pub birthday: NaiveDate,
    /// Optional ordered technology stack, each entry 0-32 characters.
    pub stack: Option<Vec<String>>,
    /// Derived blob used for substring matching.
    pub search: String,
}

impl PersonRecord {
    /// Creates a new person record.
    #[must_use]
    pub fn new(
        id: PersonId,
        nickname: String,
        name: String,
        birthday: NaiveDate,
        stack: Option<Vec<String>>,
        search: String,
    ) -> Self {
        Self {
            id,
            nickname,
            name,
            birthday,
            stack,
            search,
        }
    }
}
