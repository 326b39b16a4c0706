use std::sync::Arc;

use async_trait::async_trait;
use signup_shared::HttpResponse;

use crate::ports::LogErrorRepository;
use crate::presentation::Controller;

/// Forwards every request to the wrapped controller and records the trace
/// of any 500 response in the error log.
///
/// The wrapped controller's response is always returned untouched, even
/// when writing the log entry fails.
pub struct LogControllerDecorator<C> {
    controller: C,
    log_error_repository: Arc<dyn LogErrorRepository>,
}

impl<C> LogControllerDecorator<C> {
    pub fn new(controller: C, log_error_repository: Arc<dyn LogErrorRepository>) -> Self {
        Self {
            controller,
            log_error_repository,
        }
    }
}

#[async_trait]
impl<C: Controller> Controller for LogControllerDecorator<C> {
    type Request = C::Request;
    type Output = C::Output;

    async fn handle(&self, request: Self::Request) -> HttpResponse<Self::Output> {
        let response = self.controller.handle(request).await;

        if response.is_server_error() {
            let stack = response
                .error()
                .and_then(|error| error.stack.as_deref())
                .unwrap_or_default();

            if let Err(e) = self.log_error_repository.log_error(stack).await {
                tracing::warn!(error = %e, "Failed to record server error");
            }
        }

        response
    }
}
