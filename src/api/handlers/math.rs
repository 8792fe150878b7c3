// src/api/handlers/math.rs
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use crate::calculator::Operator;
use crate::errors::{Result, ServiceError};
use crate::models::{MathRequest, MathResponse};

/// /math - decode, validate, compute, encode.
///
/// Only the first JSON value of the body is read. Decode and validation
/// failures short-circuit with a plain-text 400. Domain errors (division by
/// zero, overflow) still produce a JSON `MathResponse`, also with status 400.
pub async fn calculate(body: web::Bytes) -> Result<HttpResponse> {
    let req = MathRequest::from_body(&body).map_err(|e| {
        log::error!("Bad JSON: {}", e);
        ServiceError::BadJson(e)
    })?;

    let op: Operator = req.op.parse().map_err(|e| {
        log::error!("Invalid operator: {:?}", req.op);
        e
    })?;

    let outcome = op.apply(req.left, req.right);
    if let Err(e) = &outcome {
        log::warn!("{} {} {} failed: {}", req.left, op, req.right, e);
    }
    let resp = MathResponse::from(outcome);

    let mut payload = serde_json::to_vec(&resp).map_err(|e| {
        log::error!("Returning: {}", e);
        ServiceError::Encode(e)
    })?;
    payload.push(b'\n');

    let status = if resp.is_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    Ok(HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(payload))
}
