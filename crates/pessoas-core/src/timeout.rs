//! Timeout wrapper for async operations.

use crate::PessoasError;
use std::time::Duration;

/// Wraps an async operation with a timeout.
///
/// On elapse the pending result is abandoned; work already dispatched to
/// spawned tasks is not cancelled and may still complete against the stores.
pub async fn with_timeout<F, Fut, T>(duration: Duration, f: F) -> Result<T, PessoasError>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, PessoasError>>,
{
    tokio::time::timeout(duration, f())
        .await
        .map_err(|_| PessoasError::Timeout(format!("Operation timed out after {:?}", duration)))?
}
