//! Domain layer containing the signup and verification entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
