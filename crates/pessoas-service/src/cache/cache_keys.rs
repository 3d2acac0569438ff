//! Cache key generators for consistent key naming.

use pessoas_core::PersonId;

/// Key for the identity mapping written at save time.
#[must_use]
pub fn person_by_id(id: PersonId) -> String {
    format!("pessoas:id:{}", id)
}

/// Key for a term-search result cached on a miss-then-hit.
#[must_use]
pub fn find_by_term(term: &str) -> String {
    format!("cache:findByTerm:{}", term)
}
