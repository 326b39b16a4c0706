//! Request handlers and the capability they share.

mod signup;

use async_trait::async_trait;
use signup_shared::HttpResponse;

pub use signup::SignUpController;

/// Anything that turns a request into a response envelope.
///
/// Implementations never fail: every outcome, including infrastructure
/// failures, is expressed as an [`HttpResponse`].
#[async_trait]
pub trait Controller: Send + Sync {
    type Request: Send + 'static;
    type Output: Send + 'static;

    async fn handle(&self, request: Self::Request) -> HttpResponse<Self::Output>;
}
