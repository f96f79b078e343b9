//! Request and response bodies

pub mod signup;

pub use signup::*;
