//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod cafe;

pub use cafe::{default_seed, normalize_nombre, Cafe, CafeId, CafeMutation, NewCafe};
