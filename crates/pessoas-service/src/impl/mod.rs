//! Orchestrator implementations.

pub mod fetch_service_impl;
pub mod save_service_impl;

pub use fetch_service_impl::FetchPeopleServiceImpl;
pub use save_service_impl::SavePeopleServiceImpl;
