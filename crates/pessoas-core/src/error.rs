//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pessoas service.
///
/// Provider failures (database, cache) are never retried here and surface
/// to the caller unchanged; mapping to HTTP status codes happens at the
/// REST boundary via [`status_code`](PessoasError::status_code).
#[derive(Error, Debug)]
pub enum PessoasError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Request validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Primary store (transport or constraint) failure
    #[error("Database error: {0}")]
    Database(String),

    /// Cache store failure
    #[error("Cache error: {0}")]
    Cache(String),

    /// Boundary timeout exceeded
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PessoasError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Timeout(_) => 503,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error originated in one of the two stores.
    #[must_use]
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Cache(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for PessoasError {
    fn from(err: sqlx::Error) -> Self {
        // Constraint violations included: every driver failure is a provider
        // failure here. Absent rows are handled with fetch_optional upstream.
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for PessoasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `PessoasError`.
    #[must_use]
    pub fn from_error(error: &PessoasError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&PessoasError> for ErrorResponse {
    fn from(error: &PessoasError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(PessoasError::not_found("Person", 1).status_code(), 404);
        assert_eq!(PessoasError::validation("bad nickname").status_code(), 400);
        assert_eq!(PessoasError::Database("down".to_string()).status_code(), 500);
        assert_eq!(PessoasError::Cache("down".to_string()).status_code(), 500);
        assert_eq!(PessoasError::Timeout("800ms".to_string()).status_code(), 503);
        assert_eq!(PessoasError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PessoasError::not_found("Person", 1).error_code(), "NOT_FOUND");
        assert_eq!(PessoasError::validation("bad").error_code(), "VALIDATION_ERROR");
        assert_eq!(PessoasError::Database("x".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(PessoasError::Cache("x".to_string()).error_code(), "CACHE_ERROR");
        assert_eq!(PessoasError::Timeout("x".to_string()).error_code(), "TIMEOUT");
        assert_eq!(PessoasError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_provider_errors() {
        assert!(PessoasError::Database("lost".to_string()).is_provider_error());
        assert!(PessoasError::Cache("lost".to_string()).is_provider_error());
        assert!(!PessoasError::not_found("Person", 1).is_provider_error());
        assert!(!PessoasError::validation("bad").is_provider_error());
        assert!(!PessoasError::Timeout("x".to_string()).is_provider_error());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = PessoasError::not_found("Person", "123");
        assert!(not_found.to_string().contains("Person"));
        assert!(not_found.to_string().contains("123"));

        let validation = PessoasError::validation("nickname too long");
        assert!(validation.to_string().contains("nickname too long"));

        let internal = PessoasError::internal("panic");
        assert!(internal.to_string().contains("panic"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = PessoasError::not_found("Person", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = PessoasError::validation("bad input");
        let details = vec![FieldError {
            field: "nickname".to_string(),
            message: "Nickname must be at most 32 characters".to_string(),
            code: "text_too_long".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = PessoasError::not_found("Person", 42);
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "NOT_FOUND");
    }
}
