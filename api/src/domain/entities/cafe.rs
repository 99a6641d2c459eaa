//! Cafe domain entity
//!
//! A named coffee record. The id is assigned once at creation and never
//! changes; only `nombre` can be updated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a cafe
///
/// Seeded records use short ids ("1", "2", ...); records created through the
/// API get a UUID v4 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CafeId(pub String);

impl CafeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CafeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CafeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CafeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CafeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A coffee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: CafeId,
    pub nombre: String,
}

impl Cafe {
    /// Whether this cafe is the same logical coffee as `nombre`.
    ///
    /// Names are compared trimmed and case-folded, so "  cortado" matches
    /// "Cortado".
    pub fn same_coffee_as(&self, nombre: &str) -> bool {
        normalize_nombre(&self.nombre) == normalize_nombre(nombre)
    }
}

/// Result of a mutation: the affected cafe plus the collection as it stood
/// right after the change, read under the same lock as the write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeMutation {
    pub cafe: Cafe,
    pub cafes: Vec<Cafe>,
}

/// Data for creating a new cafe
#[derive(Debug, Clone)]
pub struct NewCafe {
    pub nombre: String,
}

impl NewCafe {
    /// Build a new cafe, rejecting blank names.
    pub fn new(nombre: &str) -> Result<Self, String> {
        let nombre = nombre.trim();
        if nombre.is_empty() {
            return Err("El nombre del café no puede estar vacío".to_string());
        }
        Ok(Self {
            nombre: nombre.to_string(),
        })
    }
}

/// Canonical form used for name equality
pub fn normalize_nombre(nombre: &str) -> String {
    nombre.trim().to_lowercase()
}

/// The records a fresh store starts with
pub fn default_seed() -> Vec<Cafe> {
    ["Cortado", "Americano", "Espresso", "Cappuccino"]
        .iter()
        .enumerate()
        .map(|(i, nombre)| Cafe {
            id: CafeId((i + 1).to_string()),
            nombre: nombre.to_string(),
        })
        .collect()
}
