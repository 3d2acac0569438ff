//! # Pessoas Service
//!
//! The cache-aside consistency layer: read orchestration (trust the cache or
//! fall through to the primary store) and write orchestration (best-effort
//! dual write to both stores). The orchestrators are stateless coordinators
//! over two narrow gateways and a draft capability; they never retry, never
//! swallow a gateway error, and never compensate a partial failure.

pub mod cache;
pub mod dto;
pub mod fetch_service;
pub mod r#impl;
pub mod save_service;

pub use cache::{CacheGateway, RedisCacheGateway};
pub use dto::CreatePersonRequest;
pub use fetch_service::FetchPeopleService;
pub use r#impl::{FetchPeopleServiceImpl, SavePeopleServiceImpl};
pub use save_service::SavePeopleService;
