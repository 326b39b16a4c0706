//! # Signup Shared
//!
//! Wire types shared between the HTTP adapter and the request-handling core.
//! Nothing in here knows about hashing, storage or the web framework.

pub mod dto;
pub mod response;

pub use dto::SignupRequest;
pub use response::{ErrorDescriptor, ErrorKind, HttpResponse, ResponseBody};
