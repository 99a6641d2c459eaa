//! Fallback handler for routes that do not exist

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Any path or method the router does not define
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "Unknown route");
    AppError::RouteNotFound
}
