//! Application error types.

use thiserror::Error;

/// Errors surfaced by the catalog services.
#[derive(Debug, Error)]
pub enum AppError {
    /// An id-based lookup (content type, content item, data type, or
    /// property editor) found nothing.
    #[error("not found")]
    NotFound,

    /// A collaborator (store, registry, dictionary) failed.
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
