//! Cross-cutting error types for Prewarn.
//!
//! Domain-specific errors (`StoreError`, `PredictError`, `ConfigError`) live in
//! their respective crates. They converge into `anyhow` in `prewarn-cli`.

use thiserror::Error;

/// Errors that can be raised by any Prewarn crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
