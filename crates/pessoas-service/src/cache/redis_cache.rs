//! Redis-based cache gateway implementation.

use super::CacheGateway;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use pessoas_core::{PersonId, PessoasError, PessoasResult};
use std::sync::Arc;
use tracing::debug;

/// Redis-backed [`CacheGateway`].
///
/// Writes are plain `SET` upserts with no TTL; expiry and eviction are
/// delegated to the store.
pub struct RedisCacheGateway {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheGateway {
    /// Creates a new Redis cache gateway.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Creates a no-op gateway (for when Redis is disabled).
    ///
    /// Reads always miss and writes succeed without persisting, so every
    /// lookup falls through to the primary store.
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> PessoasResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| PessoasError::Cache(format!("Failed to get Redis connection: {}", e))),
            None => Err(PessoasError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheGateway for RedisCacheGateway {
    async fn get_by_key(&self, key: &str) -> PessoasResult<Option<PersonId>> {
        if self.pool.is_none() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| PessoasError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match value {
            Some(raw) => {
                debug!("Cache hit for key '{}'", key);
                let id = PersonId::parse(&raw).map_err(|e| {
                    PessoasError::Cache(format!("Malformed cache value for key '{}': {}", key, e))
                })?;
                Ok(Some(id))
            }
            None => {
                debug!("Cache miss for key '{}'", key);
                Ok(None)
            }
        }
    }

    async fn upsert(&self, key: &str, value: PersonId) -> PessoasResult<PersonId> {
        if self.pool.is_none() {
            return Ok(value);
        }

        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(key, value.to_string())
            .await
            .map_err(|e| PessoasError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}'", key);
        Ok(value)
    }
}

impl std::fmt::Debug for RedisCacheGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheGateway")
            .field("enabled", &self.pool.is_some())
            .finish()
    }
}
