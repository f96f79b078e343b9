//! # Ambition API
//!
//! HTTP surface of the signup page: form sessions, email verification, and
//! signup submission. Library exports exist for the integration tests and
//! for embedding the app elsewhere.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod logging;
pub mod middleware;
pub mod routes;
