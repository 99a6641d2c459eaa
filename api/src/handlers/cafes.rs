//! Cafe handlers
//!
//! Endpoints for the cafe collection.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{Cafe, CafeId};
use crate::error::AppError;
use crate::AppState;

/// Request to create a cafe
///
/// Any `id` sent by the client is ignored; ids are always generated.
#[derive(Debug, Deserialize)]
pub struct CreateCafeRequest {
    pub nombre: String,
}

/// Request to update a cafe
///
/// A missing `nombre` becomes empty so the id checks still run first and
/// the blank name is reported afterwards.
#[derive(Debug, Deserialize)]
pub struct UpdateCafeRequest {
    /// Must match the path id when present. Numbers are compared by their
    /// decimal form, so `1` matches `/cafes/1`.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub nombre: String,
}

impl UpdateCafeRequest {
    fn payload_id(&self) -> Option<CafeId> {
        match &self.id {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(CafeId(s.clone())),
            Some(other) => Some(CafeId(other.to_string())),
        }
    }
}

/// GET /cafes
///
/// List every cafe in insertion order.
pub async fn list_cafes(State(state): State<AppState>) -> Result<Json<Vec<Cafe>>, AppError> {
    let cafes = state.cafe_service.list().await?;
    Ok(Json(cafes))
}

/// GET /cafes/:id
pub async fn get_cafe(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Cafe>, AppError> {
    let Path(id) = path?;
    let cafe = state.cafe_service.get(&CafeId(id)).await?;
    Ok(Json(cafe))
}

/// POST /cafes
///
/// Create a cafe. Responds 201 with the whole updated collection.
pub async fn create_cafe(
    State(state): State<AppState>,
    payload: Result<Json<CreateCafeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Cafe>>), AppError> {
    let Json(request) = payload?;

    let cafes = state.cafe_service.create(&request.nombre).await?;

    Ok((StatusCode::CREATED, Json(cafes)))
}

/// PUT /cafes/:id
///
/// Rename a cafe. Responds 200 with the whole updated collection.
pub async fn update_cafe(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateCafeRequest>, JsonRejection>,
) -> Result<Json<Vec<Cafe>>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let payload_id = request.payload_id();

    let cafes = state
        .cafe_service
        .update(&CafeId(id), payload_id.as_ref(), &request.nombre)
        .await?;

    Ok(Json(cafes))
}

/// DELETE /cafes/:id
///
/// Remove a cafe. Requires an Authorization header (see `auth::require_token`).
/// Responds 200 with the remaining collection.
pub async fn delete_cafe(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Cafe>>, AppError> {
    let Path(id) = path?;
    let cafes = state.cafe_service.delete(&CafeId(id)).await?;
    Ok(Json(cafes))
}
