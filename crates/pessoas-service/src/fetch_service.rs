//! Fetch orchestrator trait definition.

use async_trait::async_trait;
use pessoas_core::{PersonId, PessoasResult};

/// Cache-aside read orchestration over the cache and the primary store.
#[async_trait]
pub trait FetchPeopleService: Send + Sync {
    /// Resolves a person by id.
    ///
    /// Fails with `NotFound` when neither the cache nor the primary store
    /// knows the identifier.
    async fn fetch_people_by_id(&self, id: PersonId) -> PessoasResult<PersonId>;

    /// Resolves a person by search term.
    ///
    /// Returns `Ok(None)` when there is no match anywhere; never an error.
    async fn fetch_people_by_term(&self, term: &str) -> PessoasResult<Option<PersonId>>;
}
