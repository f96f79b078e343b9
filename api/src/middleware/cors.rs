//! CORS middleware configuration for the signup page.
//!
//! The form is served from a browser origin that differs from the API in
//! most deployments. Development is permissive; production only admits the
//! origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use amb_shared::Environment;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: selects production settings when set to "production"
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if Environment::from_env().is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn exposed_headers() -> Vec<header::HeaderName> {
    vec![header::LOCATION, header::HeaderName::from_static("x-request-id")]
}

fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(exposed_headers())
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(exposed_headers())
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(str::trim) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_development_cors() {
        temp_env::with_var("ENVIRONMENT", Some("development"), || {
            let _cors = create_cors();
        });
    }

    #[test]
    fn test_create_production_cors() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("production")),
                ("ALLOWED_ORIGINS", Some("https://ambition.example, https://www.ambition.example")),
            ],
            || {
                let _cors = create_cors();
            },
        );
    }

    #[test]
    fn test_cors_max_age_parsing() {
        temp_env::with_var("CORS_MAX_AGE", Some("invalid"), || {
            let _cors = create_cors();
        });
    }
}
