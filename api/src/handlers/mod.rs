//! Shared response handling for route handlers

pub mod error;

pub use error::{handle_domain_error, json_error_handler, validation_error_response};
