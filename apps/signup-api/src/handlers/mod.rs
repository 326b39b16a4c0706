//! HTTP handlers and route configuration.

mod health;
mod signup;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(health::health_check))
            .route("/signup", web::post().to(signup::signup)),
    );
}
