//! Errors raised by actix extractors before a request reaches a controller.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use signup_shared::ErrorDescriptor;

/// Request bodies that never make it to a controller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::MalformedBody(detail) => {
                tracing::debug!("Rejecting request body: {}", detail);
                ErrorDescriptor::invalid_param("body")
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// `JsonConfig` error handler keeping body errors inside the envelope format.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::MalformedBody(err.to_string()).into()
}
