// src/api/routes.rs
use actix_web::web;
use super::handlers;

/// Largest `/math` body accepted before the framework answers 413.
pub const MAX_MATH_BODY_BYTES: usize = 1024 * 1024;

/// Registers both responders. Neither route is restricted to a method.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::route().to(handlers::health_check))
        .service(
            web::resource("/math")
                .app_data(web::PayloadConfig::new(MAX_MATH_BODY_BYTES))
                .route(web::route().to(handlers::calculate)),
        );
}
