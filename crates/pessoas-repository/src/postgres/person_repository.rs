//! Postgres person repository.

use crate::traits::PersonRepository;
use async_trait::async_trait;
use pessoas_core::{PersonId, PersonRecord, PessoasResult};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Postgres-backed [`PersonRepository`].
pub struct PgPersonRepository {
    pool: Arc<PgPool>,
}

impl PgPersonRepository {
    /// Creates a new repository over a shared pool.
    #[must_use]
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn find_by_id(&self, id: PersonId) -> PessoasResult<Option<PersonId>> {
        debug!("Repository: find_by_id {}", id);

        let found: Option<Uuid> = sqlx::query_scalar("select id from pessoas where id = $1")
            .bind(id.into_inner())
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(found.map(PersonId::from))
    }

    async fn find_by_term(&self, pattern: &str) -> PessoasResult<Option<PersonId>> {
        debug!("Repository: find_by_term {}", pattern);

        // No ORDER BY: first match per the store's own ordering.
        let found: Option<Uuid> =
            sqlx::query_scalar("select id from pessoas where search ilike $1 limit 1")
                .bind(pattern)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(found.map(PersonId::from))
    }

    async fn insert(&self, person: &PersonRecord) -> PessoasResult<PersonRecord> {
        debug!("Repository: insert person {}", person.id);

        sqlx::query(
            r#"
            insert into pessoas (id, nickname, name, birthday, stack, search)
            values ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(person.id.into_inner())
        .bind(&person.nickname)
        .bind(&person.name)
        .bind(person.birthday)
        .bind(person.stack.clone())
        .bind(&person.search)
        .execute(self.pool.as_ref())
        .await?;

        Ok(person.clone())
    }
}

impl std::fmt::Debug for PgPersonRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgPersonRepository").finish_non_exhaustive()
    }
}
