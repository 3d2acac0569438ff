//! Postgres implementations of the store gateway.

pub mod person_repository;

pub use person_repository::PgPersonRepository;
