//! Error types for the ResultKit core.

/// Core error type for ResultKit infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum ResultKitError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for ResultKit operations.
pub type ResultKitResult<T> = Result<T, ResultKitError>;
