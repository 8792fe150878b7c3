// src/errors.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use actix_web::http::header::ContentType;
use thiserror::Error;

/// Failures that stop a request before a `MathResponse` can be produced.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Bad JSON")]
    BadJson(#[from] serde_json::Error),

    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Returning")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadJson(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidOperator(_) => StatusCode::BAD_REQUEST,
            ServiceError::Encode(_) => StatusCode::BAD_REQUEST,
            ServiceError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(format!("{}\n", self))
    }
}

/// Domain errors. These are reported inside the response body, not as transport errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Division by 0")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,
}

pub type Result<T> = std::result::Result<T, ServiceError>;
