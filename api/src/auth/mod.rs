//! Request authorization

pub mod token;

pub use token::require_token;
