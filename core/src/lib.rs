//! # Ambition Core
//!
//! Core business logic and domain layer for the Ambition signup flow.
//! This crate contains the verification and signup entities, the
//! verification flow service, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
