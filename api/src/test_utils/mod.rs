//! Test utilities
//!
//! Fixtures build seeded stores and app state; the mocks are repositories
//! that fail on purpose so error mapping can be exercised.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
