//! Error log sinks.

use async_trait::async_trait;

use signup_core::ports::{LogError, LogErrorRepository};

/// Writes server error traces to the tracing pipeline.
///
/// Used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogErrorRepository;

#[async_trait]
impl LogErrorRepository for TracingLogErrorRepository {
    async fn log_error(&self, stack: &str) -> Result<(), LogError> {
        tracing::error!(stack = %stack, "Request failed with a server error");
        Ok(())
    }
}
