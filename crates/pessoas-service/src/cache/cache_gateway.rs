//! Cache gateway contract consumed by the orchestrators.

use async_trait::async_trait;
use pessoas_core::{PersonId, PessoasResult};

/// Gateway to the key/value store mapping string keys to person identifiers.
///
/// A missing key is `Ok(None)`, never an error. Transport failures surface
/// as [`PessoasError::Cache`](pessoas_core::PessoasError::Cache). Eviction
/// and TTL are the store's business, not this contract's.
#[async_trait]
pub trait CacheGateway: Send + Sync {
    /// Returns the cached identifier for `key`, if present.
    async fn get_by_key(&self, key: &str) -> PessoasResult<Option<PersonId>>;

    /// Inserts or replaces the mapping for `key`, returning the supplied
    /// identifier on success. Concurrent writers resolve last-write-wins at
    /// the store layer.
    async fn upsert(&self, key: &str, value: PersonId) -> PessoasResult<PersonId>;
}
