//! Save orchestrator implementation.

use crate::cache::{cache_keys, CacheGateway};
use crate::save_service::SavePeopleService;
use async_trait::async_trait;
use pessoas_core::{PersonDraft, PersonId, PessoasError, PessoasResult};
use pessoas_repository::PersonRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Dual-write [`SavePeopleService`] over the two gateways.
pub struct SavePeopleServiceImpl {
    cache: Arc<dyn CacheGateway>,
    repository: Arc<dyn PersonRepository>,
}

impl SavePeopleServiceImpl {
    /// Creates a new save orchestrator.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheGateway>, repository: Arc<dyn PersonRepository>) -> Self {
        Self { cache, repository }
    }
}

#[async_trait]
impl SavePeopleService for SavePeopleServiceImpl {
    async fn save_people(&self, draft: &dyn PersonDraft) -> PessoasResult<PersonId> {
        let search = draft.build_search();
        let person = draft.build_person(search);
        let id = person.id;

        debug!("Saving person {}", id);

        // Both writes are issued unordered on their own tasks.
        let cache = Arc::clone(&self.cache);
        let key = cache_keys::person_by_id(id);
        let to_cache = tokio::spawn(async move { cache.upsert(&key, id).await });

        let repository = Arc::clone(&self.repository);
        let to_database = tokio::spawn(async move { repository.insert(&person).await });

        // All-succeed join: the first branch error surfaces immediately while
        // the other spawned task runs to completion. No rollback either way.
        let cache_branch = async {
            to_cache
                .await
                .map_err(|e| PessoasError::Internal(format!("Cache write task failed: {}", e)))?
        };
        let database_branch = async {
            to_database
                .await
                .map_err(|e| PessoasError::Internal(format!("Insert task failed: {}", e)))?
        };
        tokio::try_join!(cache_branch, database_branch)?;

        info!("Person created: {}", id);
        Ok(id)
    }
}

impl std::fmt::Debug for SavePeopleServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavePeopleServiceImpl").finish_non_exhaustive()
    }
}
