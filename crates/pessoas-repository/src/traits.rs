//! Primary store gateway contract.

use async_trait::async_trait;
use pessoas_core::{PersonId, PersonRecord, PessoasResult};

/// Gateway to the relational store holding person records.
///
/// Lookups resolve to identifiers only; an absent row is `Ok(None)`, never an
/// error. Transport and constraint failures surface as
/// [`PessoasError::Database`](pessoas_core::PessoasError::Database).
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Looks up a person by primary key.
    async fn find_by_id(&self, id: PersonId) -> PessoasResult<Option<PersonId>>;

    /// Case-insensitive substring search over the stored search blob.
    ///
    /// `pattern` is a ready-made wildcard pattern (`%term%`). At most one
    /// match is returned, first per the store's own ordering.
    async fn find_by_term(&self, pattern: &str) -> PessoasResult<Option<PersonId>>;

    /// Inserts a new person record.
    async fn insert(&self, person: &PersonRecord) -> PessoasResult<PersonRecord>;
}
