//! # Pessoas REST
//!
//! HTTP boundary for the pessoas service: routing, request validation,
//! error-to-status mapping, and the per-request pipeline timeout.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use responses::{ApiResult, AppError};
pub use router::create_router;
pub use state::AppState;
