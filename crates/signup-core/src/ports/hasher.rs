//! Password hashing port.

use async_trait::async_trait;

/// One-way digest of a plaintext secret. Salt handling is up to the
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Hasher: Send + Sync {
    /// Hash a plain text secret.
    async fn hash(&self, plaintext: &str) -> Result<String, HashingError>;
}

/// Hashing errors.
#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    #[error("Hashing failed: {0}")]
    Primitive(String),

    #[error("Hashing task aborted: {0}")]
    Aborted(String),
}
