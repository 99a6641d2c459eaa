//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Cafe, CafeId, CafeMutation, NewCafe};
use crate::error::DomainError;

/// Repository for Cafe entities
///
/// Every mutating method is atomic: its existence and uniqueness checks run
/// in the same critical section as the write, and the returned snapshot is
/// taken there too.
#[async_trait]
pub trait CafeRepository: Send + Sync {
    /// All cafes in insertion order
    async fn list(&self) -> Result<Vec<Cafe>, DomainError>;

    /// Find a cafe by ID
    async fn find_by_id(&self, id: &CafeId) -> Result<Option<Cafe>, DomainError>;

    /// Append a new cafe with a freshly generated id.
    ///
    /// Fails with `AlreadyExists` if a cafe with the same name is present.
    async fn create(&self, cafe: &NewCafe) -> Result<CafeMutation, DomainError>;

    /// Replace the name of an existing cafe
    ///
    /// Fails with `NotFound` if no cafe has this id.
    async fn update_nombre(&self, id: &CafeId, nombre: &str)
        -> Result<CafeMutation, DomainError>;

    /// Remove a cafe; the mutation carries the removed record
    ///
    /// Fails with `NotFound` if no cafe has this id.
    async fn delete(&self, id: &CafeId) -> Result<CafeMutation, DomainError>;
}
