// src/api/handlers/health.rs
use actix_web::{HttpResponse, Result};
use actix_web::http::header::ContentType;

/// Liveness probe. Answers every method with a fixed body.
pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK!\n"))
}
