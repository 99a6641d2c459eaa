//! Startup seed for the in-memory store

use std::path::Path;

use anyhow::Context;

use crate::domain::entities::{default_seed, Cafe};

/// Load the seed records.
///
/// With no path, the built-in seed is used. Otherwise the file must hold a
/// JSON array of `{"id", "nombre"}` objects with at least one entry.
pub async fn load_seed(path: Option<&Path>) -> anyhow::Result<Vec<Cafe>> {
    let Some(path) = path else {
        return Ok(default_seed());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let cafes: Vec<Cafe> = serde_json::from_str(&raw)
        .with_context(|| format!("Seed file {} is not a JSON array of cafes", path.display()))?;

    anyhow::ensure!(
        !cafes.is_empty(),
        "Seed file {} contains no cafes",
        path.display()
    );

    Ok(cafes)
}
