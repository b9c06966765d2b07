//! Unified error handling for sarago
//!
//! This module provides the error type covering every failure the server can
//! hit. Page handlers render these inline; request extraction failures are
//! turned into HTTP responses through `ResponseError`.

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Main application error type
///
/// All errors in the application should be converted to this type.
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Database Errors ====================
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database pool error: {0}")]
    Pool(String),

    // ==================== Validation Errors ====================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ==================== Resource Errors ====================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Pool(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the short error code used in logs and error pages
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::Pool(_) => "pool_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Template(_) => "template_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Display text can carry user input back, so strip markup characters.
        let message: String = self
            .to_string()
            .chars()
            .filter(|c| !matches!(c, '<' | '>' | '&' | '"'))
            .collect();
        let body = format!(
            "<p class=\"error\" data-code=\"{}\">{}</p>",
            self.error_code(),
            message
        );

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }
}
