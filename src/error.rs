//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Outcomes a document store can report besides success.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{collection} '{id}' already exists")]
    Conflict { collection: &'static str, id: String },
    #[error("{collection} '{id}' not found")]
    NotFound { collection: &'static str, id: String },
    #[error("store failure: {0}")]
    StoreFailure(String),
}

impl StoreError {
    pub fn conflict(collection: &'static str, id: impl Into<String>) -> Self {
        StoreError::Conflict { collection, id: id.into() }
    }

    pub fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound { collection, id: id.into() }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::StoreFailure(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::StoreFailure(format!("malformed document: {}", e))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Unreadable or incomplete JSON bodies are caller errors, reported in the common error body.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidArgument(rejection.body_text())
    }
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Store(StoreError::NotFound { .. }))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Store(StoreError::Conflict { .. }))
    }
}

/// Body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Store(StoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Store(StoreError::Conflict { .. }) => (StatusCode::CONFLICT, "conflict"),
            AppError::Store(StoreError::StoreFailure(_)) => (StatusCode::BAD_GATEWAY, "store_failure"),
            AppError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
