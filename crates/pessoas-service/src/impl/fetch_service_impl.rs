//! Fetch orchestrator implementation.

use crate::cache::{cache_keys, CacheGateway};
use crate::fetch_service::FetchPeopleService;
use async_trait::async_trait;
use pessoas_core::{PersonId, PessoasError, PessoasResult};
use pessoas_repository::PersonRepository;
use std::sync::Arc;
use tracing::debug;

/// Cache-aside [`FetchPeopleService`] over the two gateways.
pub struct FetchPeopleServiceImpl {
    cache: Arc<dyn CacheGateway>,
    repository: Arc<dyn PersonRepository>,
}

impl FetchPeopleServiceImpl {
    /// Creates a new fetch orchestrator.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheGateway>, repository: Arc<dyn PersonRepository>) -> Self {
        Self { cache, repository }
    }
}

#[async_trait]
impl FetchPeopleService for FetchPeopleServiceImpl {
    async fn fetch_people_by_id(&self, id: PersonId) -> PessoasResult<PersonId> {
        debug!("Fetching person by id: {}", id);

        let key = cache_keys::person_by_id(id);
        if let Some(cached) = self.cache.get_by_key(&key).await? {
            // Records are immutable once written, so the entry is trusted
            // without reconfirming against the primary store.
            return Ok(cached);
        }

        // This path does not repopulate the cache on a store hit; the save
        // path is the single writer of pessoas:id:* entries.
        match self.repository.find_by_id(id).await? {
            Some(found) => Ok(found),
            None => Err(PessoasError::not_found("Person", id)),
        }
    }

    async fn fetch_people_by_term(&self, term: &str) -> PessoasResult<Option<PersonId>> {
        debug!("Fetching person by term: {}", term);

        let key = cache_keys::find_by_term(term);
        if let Some(cached) = self.cache.get_by_key(&key).await? {
            return Ok(Some(cached));
        }

        let pattern = format!("%{}%", term);
        match self.repository.find_by_term(&pattern).await? {
            None => Ok(None),
            Some(matched) => {
                let cached = self.cache.upsert(&key, matched).await?;
                Ok(Some(cached))
            }
        }
    }
}

impl std::fmt::Debug for FetchPeopleServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchPeopleServiceImpl").finish_non_exhaustive()
    }
}
