//! In-memory adapters
//!
//! The cafe store lives in process memory and is re-seeded on every start.

pub mod cafe_repo;
pub mod seed;

pub use cafe_repo::InMemoryCafeRepository;
pub use seed::load_seed;
