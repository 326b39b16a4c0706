//! Route adapter for the signup pipeline.

use actix_web::{HttpResponse, http::StatusCode, web};
use serde::Serialize;
use signup_shared::{HttpResponse as Envelope, ResponseBody, SignupRequest};

use crate::state::AppState;

/// POST /api/signup
pub async fn signup(state: web::Data<AppState>, body: web::Json<SignupRequest>) -> HttpResponse {
    let envelope = state.signup.handle(body.into_inner()).await;

    into_response(envelope)
}

/// Write the envelope's status code and body onto the wire.
fn into_response<T: Serialize>(envelope: Envelope<T>) -> HttpResponse {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match envelope.body {
        ResponseBody::Ok(data) => HttpResponse::build(status).json(data),
        ResponseBody::Error(error) => HttpResponse::build(status).json(error),
    }
}
