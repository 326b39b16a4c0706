//! The uniform response envelope returned by every request handler.

use serde::{Deserialize, Serialize};

/// Category of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    MissingParam,
    InvalidParam,
    ServerError,
}

/// Error payload placed in the envelope body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,

    /// Offending request field, absent for server errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// A human-readable summary of the problem.
    pub message: String,

    /// Failure trace of a server error. Only ever read by the error log.
    #[serde(skip)]
    pub stack: Option<String>,
}

impl ErrorDescriptor {
    pub fn missing_param(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            kind: ErrorKind::MissingParam,
            message: format!("Missing param: {field}"),
            field: Some(field),
            stack: None,
        }
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            kind: ErrorKind::InvalidParam,
            message: format!("Invalid param: {field}"),
            field: Some(field),
            stack: None,
        }
    }

    pub fn server_error(stack: Option<String>) -> Self {
        Self {
            kind: ErrorKind::ServerError,
            field: None,
            message: "Internal server error".to_string(),
            stack,
        }
    }
}

/// Body of an envelope: either the success payload or an error descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Ok(T),
    Error(ErrorDescriptor),
}

/// `{ statusCode, body }` envelope. The status code alone decides which
/// variant of [`ResponseBody`] is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse<T> {
    pub status_code: u16,
    pub body: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    /// 200 with the given payload.
    pub fn ok(data: T) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Ok(data),
        }
    }

    /// 400 carrying a parameter error.
    pub fn bad_request(error: ErrorDescriptor) -> Self {
        Self {
            status_code: 400,
            body: ResponseBody::Error(error),
        }
    }

    /// 500 carrying the failure trace for the error log.
    pub fn server_error(stack: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: ResponseBody::Error(ErrorDescriptor::server_error(Some(stack.into()))),
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code == 500
    }

    pub fn error(&self) -> Option<&ErrorDescriptor> {
        match &self.body {
            ResponseBody::Ok(_) => None,
            ResponseBody::Error(error) => Some(error),
        }
    }
}
