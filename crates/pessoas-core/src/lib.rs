//! # Pessoas Core
//!
//! Core types, traits, and error definitions for the pessoas service.
//! This crate provides the foundational abstractions used across all layers:
//! the error taxonomy, typed identifiers, the immutable person entity, the
//! draft capability the save path consumes, and validation rules.

pub mod domain;
pub mod draft;
pub mod error;
pub mod id;
pub mod result;
pub mod timeout;
pub mod validation;

pub use domain::*;
pub use draft::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use timeout::*;
pub use validation::*;
