//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use crate::adapters::InMemoryCafeRepository;
use crate::app::CafeService;
use crate::domain::entities::{default_seed, Cafe, CafeId};
use crate::AppState;

/// Create a cafe with a fixed id and name
pub fn test_cafe(id: &str, nombre: &str) -> Cafe {
    Cafe {
        id: CafeId::from(id),
        nombre: nombre.to_string(),
    }
}

/// A repository holding the default four-cafe seed
pub fn seeded_cafe_repo() -> InMemoryCafeRepository {
    InMemoryCafeRepository::with_cafes(default_seed()).expect("default seed is valid")
}

/// App state over a freshly seeded store, with the default reserved names
pub fn test_state() -> AppState {
    AppState {
        cafe_service: Arc::new(CafeService::new(
            Arc::new(seeded_cafe_repo()),
            &["Café Existente".to_string()],
        )),
    }
}
