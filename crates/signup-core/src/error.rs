//! Domain-level error types.

use thiserror::Error;

use crate::ports::HashingError;

/// Account store errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Failures of the account registration use case.
#[derive(Debug, Error)]
pub enum AddAccountError {
    #[error(transparent)]
    Hashing(#[from] HashingError),

    #[error(transparent)]
    Persistence(#[from] RepoError),
}
