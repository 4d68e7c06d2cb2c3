//! Error handling module for the employee backend.
//!
//! Provides the application error type with mapping to HTTP status codes and the
//! `ErrorMessage` response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error kind names as constants to avoid stringly-typed errors.
pub mod kinds {
    pub const ALREADY_EXISTS: &str = "EmployeeAlreadyExists";
    pub const NOT_FOUND: &str = "EmployeeNotFound";
    pub const DATABASE_ERROR: &str = "DatabaseError";
}

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Another employee already holds this email
    #[error("Employee with email {0} already exists")]
    AlreadyExists(String),
    /// No employee with this id
    #[error("Employee not found for id {0}")]
    NotFound(i64),
    /// Store failure
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error kind name reported in the `exception` field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::AlreadyExists(_) => kinds::ALREADY_EXISTS,
            AppError::NotFound(_) => kinds::NOT_FOUND,
            AppError::Database(_) => kinds::DATABASE_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub status: String,
    pub exception: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

impl ErrorMessage {
    pub fn new(error: &AppError) -> Self {
        Self {
            status: status_text(error.status_code()),
            exception: error.kind().to_string(),
            message: error.to_string(),
            date: Utc::now(),
        }
    }
}

/// Render a status as `"404 NOT_FOUND"`.
fn status_text(status: StatusCode) -> String {
    let reason = status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace(' ', "_");
    format!("{} {}", status.as_u16(), reason)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorMessage::new(&self);
        (status, Json(body)).into_response()
    }
}
