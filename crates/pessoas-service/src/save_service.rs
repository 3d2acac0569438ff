//! Save orchestrator trait definition.

use async_trait::async_trait;
use pessoas_core::{PersonDraft, PersonId, PessoasResult};

/// Dual-write orchestration for person creation.
#[async_trait]
pub trait SavePeopleService: Send + Sync {
    /// Creates a person from a draft and returns the generated id.
    ///
    /// The cache identity mapping and the primary-store insert are issued
    /// concurrently; success means both succeeded. A partial failure is
    /// surfaced as-is with no compensating action.
    async fn save_people(&self, draft: &dyn PersonDraft) -> PessoasResult<PersonId>;
}
