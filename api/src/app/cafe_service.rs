//! Cafe service
//!
//! Use cases for the cafe collection: list, get, create, update and delete.
//! Validation order and the mapping from repository errors to API errors
//! live here; handlers only translate HTTP to calls on this service.

use std::sync::Arc;

use crate::domain::entities::{normalize_nombre, Cafe, CafeId, NewCafe};
use crate::domain::ports::CafeRepository;
use crate::error::{AppError, DomainError};

/// Service for managing cafes
pub struct CafeService<CR>
where
    CR: CafeRepository,
{
    cafes: Arc<CR>,
    /// Normalized names that are always considered taken
    reserved_names: Vec<String>,
}

impl<CR> CafeService<CR>
where
    CR: CafeRepository,
{
    pub fn new(cafes: Arc<CR>, reserved_names: &[String]) -> Self {
        Self {
            cafes,
            reserved_names: reserved_names.iter().map(|n| normalize_nombre(n)).collect(),
        }
    }

    /// All cafes in insertion order
    pub async fn list(&self) -> Result<Vec<Cafe>, AppError> {
        Ok(self.cafes.list().await?)
    }

    /// A single cafe by id
    pub async fn get(&self, id: &CafeId) -> Result<Cafe, AppError> {
        self.cafes
            .find_by_id(id)
            .await?
            .ok_or(AppError::CafeNotFound)
    }

    /// Create a cafe and return the whole updated collection
    pub async fn create(&self, nombre: &str) -> Result<Vec<Cafe>, AppError> {
        let new_cafe = NewCafe::new(nombre).map_err(AppError::BadRequest)?;

        if self.is_reserved(&new_cafe.nombre) {
            tracing::debug!(nombre = %new_cafe.nombre, "Rejected reserved cafe name");
            return Err(AppError::DuplicateCafe);
        }

        let mutation = self.cafes.create(&new_cafe).await.map_err(|e| match e {
            DomainError::AlreadyExists(msg) => {
                tracing::debug!("{}", msg);
                AppError::DuplicateCafe
            }
            other => AppError::Domain(other),
        })?;

        let cafe = &mutation.cafe;
        tracing::info!(cafe_id = %cafe.id, nombre = %cafe.nombre, "Cafe created");

        Ok(mutation.cafes)
    }

    /// Rename a cafe and return the whole updated collection
    ///
    /// Checks, in order:
    /// 1. a payload id that differs from the path id is an `IdMismatch`
    /// 2. an unknown path id is also an `IdMismatch`
    /// 3. a blank name is a `BadRequest`
    pub async fn update(
        &self,
        path_id: &CafeId,
        payload_id: Option<&CafeId>,
        nombre: &str,
    ) -> Result<Vec<Cafe>, AppError> {
        if payload_id.is_some_and(|id| id != path_id) {
            tracing::debug!(cafe_id = %path_id, "Payload id does not match path id");
            return Err(AppError::IdMismatch);
        }

        if self.cafes.find_by_id(path_id).await?.is_none() {
            tracing::debug!(cafe_id = %path_id, "Update of unknown cafe");
            return Err(AppError::IdMismatch);
        }

        let new_cafe = NewCafe::new(nombre).map_err(AppError::BadRequest)?;

        // The record may have been deleted since the lookup above.
        let mutation = self
            .cafes
            .update_nombre(path_id, &new_cafe.nombre)
            .await
            .map_err(|e| match e {
                DomainError::NotFound(_) => AppError::IdMismatch,
                other => AppError::Domain(other),
            })?;

        let cafe = &mutation.cafe;
        tracing::info!(cafe_id = %cafe.id, nombre = %cafe.nombre, "Cafe updated");

        Ok(mutation.cafes)
    }

    /// Delete a cafe and return the remaining collection
    ///
    /// Token presence is checked by the auth middleware before this runs.
    pub async fn delete(&self, id: &CafeId) -> Result<Vec<Cafe>, AppError> {
        let mutation = self.cafes.delete(id).await.map_err(|e| match e {
            DomainError::NotFound(_) => AppError::CafeNotFound,
            other => AppError::Domain(other),
        })?;

        let removed = &mutation.cafe;
        tracing::info!(cafe_id = %removed.id, nombre = %removed.nombre, "Cafe deleted");

        Ok(mutation.cafes)
    }

    fn is_reserved(&self, nombre: &str) -> bool {
        let nombre = normalize_nombre(nombre);
        self.reserved_names.iter().any(|r| *r == nombre)
    }
}
