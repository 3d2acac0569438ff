//! Validation limits and rules for person creation requests.

use serde::{Deserialize, Serialize};

/// Length limits applied to person creation requests.
///
/// Supplied to the request adapter by configuration rather than embedded as
/// literals at the call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Maximum nickname length in characters.
    pub max_nickname_len: usize,
    /// Maximum name length in characters.
    pub max_name_len: usize,
    /// Maximum length of a single stack entry in characters.
    pub max_stack_item_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_nickname_len: 32,
            max_name_len: 100,
            max_stack_item_len: 32,
        }
    }
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is at most `max` characters long.
    pub fn bounded_text(value: &str, max: usize) -> Result<(), ValidationError> {
        if value.chars().count() > max {
            return Err(ValidationError::new("text_too_long"));
        }
        Ok(())
    }

    /// Validates that a string does not parse as a numeric value.
    pub fn not_numeric(value: &str) -> Result<(), ValidationError> {
        if value.trim().parse::<f64>().is_ok() {
            return Err(ValidationError::new("text_is_numeric"));
        }
        Ok(())
    }
}
