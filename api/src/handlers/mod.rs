//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod cafes;
pub mod fallback;

pub use cafes::{create_cafe, delete_cafe, get_cafe, list_cafes, update_cafe};
pub use fallback::route_not_found;
