//! Mock implementations of port traits

use async_trait::async_trait;

use crate::adapters::InMemoryCafeRepository;
use crate::domain::entities::{Cafe, CafeId, CafeMutation, NewCafe};
use crate::domain::ports::CafeRepository;
use crate::error::DomainError;

/// A repository whose every call fails with an internal error
pub struct FailingCafeRepository;

fn failure() -> DomainError {
    DomainError::Internal("store unavailable".to_string())
}

#[async_trait]
impl CafeRepository for FailingCafeRepository {
    async fn list(&self) -> Result<Vec<Cafe>, DomainError> {
        Err(failure())
    }

    async fn find_by_id(&self, _id: &CafeId) -> Result<Option<Cafe>, DomainError> {
        Err(failure())
    }

    async fn create(&self, _cafe: &NewCafe) -> Result<CafeMutation, DomainError> {
        Err(failure())
    }

    async fn update_nombre(
        &self,
        _id: &CafeId,
        _nombre: &str,
    ) -> Result<CafeMutation, DomainError> {
        Err(failure())
    }

    async fn delete(&self, _id: &CafeId) -> Result<CafeMutation, DomainError> {
        Err(failure())
    }
}

/// Delegates to an in-memory store, except that `list` always fails
pub struct ListFailingCafeRepository {
    inner: InMemoryCafeRepository,
}

impl ListFailingCafeRepository {
    pub fn new(inner: InMemoryCafeRepository) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CafeRepository for ListFailingCafeRepository {
    async fn list(&self) -> Result<Vec<Cafe>, DomainError> {
        Err(failure())
    }

    async fn find_by_id(&self, id: &CafeId) -> Result<Option<Cafe>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, cafe: &NewCafe) -> Result<CafeMutation, DomainError> {
        self.inner.create(cafe).await
    }

    async fn update_nombre(
        &self,
        id: &CafeId,
        nombre: &str,
    ) -> Result<CafeMutation, DomainError> {
        self.inner.update_nombre(id, nombre).await
    }

    async fn delete(&self, id: &CafeId) -> Result<CafeMutation, DomainError> {
        self.inner.delete(id).await
    }
}
