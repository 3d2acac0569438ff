//! # Pessoas Repository
//!
//! Primary store gateway for the pessoas service:
//!
//! ```text
//! Orchestrators (pessoas-service)
//!   ↓  Arc<dyn PersonRepository>   (gateway contract)
//! PgPersonRepository               (Postgres / SQLx)
//!   ↓
//! Postgres (bounded pool, 15 connections)
//! ```
//!
//! Person rows are write-once: the gateway exposes point lookup, substring
//! search, and insert, nothing else.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::PgPersonRepository;
pub use traits::*;
