//! Authorization token middleware
//!
//! The token is opaque: only its presence is checked.

use axum::{
    body::Body,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Extract the token from the Authorization header
///
/// A `Bearer ` prefix is stripped when present. Blank values and values that
/// are not visible ASCII count as missing.
fn extract_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.strip_prefix("Bearer ").unwrap_or(h).trim())
        .filter(|t| !t.is_empty())
}

/// Token middleware
///
/// Rejects the request with `MissingToken` when there is no token. Runs
/// before the handler, so a missing token is reported even for unknown ids.
pub async fn require_token(request: Request<Body>, next: Next) -> Result<Response, AppError> {
    if extract_token(&request).is_none() {
        tracing::debug!(path = %request.uri().path(), "Request without authorization token");
        return Err(AppError::MissingToken);
    }

    Ok(next.run(request).await)
}
