//! Error log port.

use async_trait::async_trait;

/// Sink for traces of requests that ended in a server error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> Result<(), LogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to write error log: {0}")]
    Write(String),
}
