//! Unified error types for the cafes API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Repository and business rule errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)
//!
//! Every error leaves the service as a JSON body `{"message": "..."}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MSG_DUPLICATE_CAFE: &str = "Ya existe un cafe con ese id";
pub const MSG_ID_MISMATCH: &str = "El id del parámetro no coincide con el id del café recibido";
pub const MSG_MISSING_TOKEN: &str = "No recibió ningún token en las cabeceras";
pub const MSG_CAFE_NOT_FOUND: &str = "No se encontró ningún cafe con ese id";
pub const MSG_ROUTE_NOT_FOUND: &str = "La ruta que intenta consultar no existe";

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Raised by storage adapters that can fail; the in-memory store never does
    #[allow(dead_code)]
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{}", MSG_DUPLICATE_CAFE)]
    DuplicateCafe,

    #[error("{}", MSG_ID_MISMATCH)]
    IdMismatch,

    #[error("{}", MSG_MISSING_TOKEN)]
    MissingToken,

    #[error("{}", MSG_CAFE_NOT_FOUND)]
    CafeNotFound,

    #[error("{}", MSG_ROUTE_NOT_FOUND)]
    RouteNotFound,

    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateCafe
            | AppError::IdMismatch
            | AppError::MissingToken
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::CafeNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::AlreadyExists(_))
            | AppError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Domain(DomainError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                "Error interno del servidor".to_string()
            }
            AppError::Domain(DomainError::NotFound(msg))
            | AppError::Domain(DomainError::AlreadyExists(msg))
            | AppError::Domain(DomainError::Validation(msg)) => msg.clone(),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
