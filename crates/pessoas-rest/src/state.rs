//! Application state for Axum handlers.

use pessoas_core::ValidationLimits;
use pessoas_service::{FetchPeopleService, SavePeopleService};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub fetch_service: Arc<dyn FetchPeopleService>,
    pub save_service: Arc<dyn SavePeopleService>,
    /// Validation limits applied before the save orchestrator runs.
    pub limits: ValidationLimits,
    /// Boundary timeout wrapping each read or write pipeline.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        fetch_service: Arc<dyn FetchPeopleService>,
        save_service: Arc<dyn SavePeopleService>,
        limits: ValidationLimits,
        request_timeout: Duration,
    ) -> Self {
        Self {
            fetch_service,
            save_service,
            limits,
            request_timeout,
        }
    }
}
