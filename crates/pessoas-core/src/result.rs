//! Result type aliases for the pessoas service.

use crate::PessoasError;

/// A specialized `Result` type for pessoas operations.
pub type PessoasResult<T> = Result<T, PessoasError>;

/// A boxed future returning a `PessoasResult`.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = PessoasResult<T>> + Send + 'a>>;
