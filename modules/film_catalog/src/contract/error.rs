//! Contract error types for the film catalog
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;
use uuid::Uuid;

/// Film catalog domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilmError {
    /// No film exists for the given id
    #[error("film not found: {id}")]
    NotFound {
        /// Identifier that failed to resolve
        id: Uuid,
    },
    /// Rejected input
    #[error("validation error: {message}")]
    Validation {
        /// What was rejected and why
        message: String,
    },
    /// Internal error
    #[error("internal error")]
    Internal,
}
