//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pessoas_core::{ErrorResponse, PessoasError};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub PessoasError);

impl From<PessoasError> for AppError {
    fn from(err: PessoasError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;
