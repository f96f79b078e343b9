use actix_web::{web, HttpServer};
use log::info;
use std::sync::Arc;

use amb_api::app::create_app;
use amb_api::config::Config;
use amb_api::routes::signup::AppState;
use amb_infra::email::{create_email_service, EmailDeliveryAdapter};
use amb_infra::session::SessionRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    amb_api::logging::init(&config.app.logging);

    info!(
        "Starting Ambition signup API ({} environment)",
        config.app.environment
    );

    let mail = create_email_service(&config.email)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let delivery = Arc::new(EmailDeliveryAdapter::new(Arc::new(mail)));

    let sessions = Arc::new(SessionRegistry::from_config(delivery, &config.app.verification));
    let purge_task = sessions.spawn_purge_task(config.purge_interval());

    info!(
        "Code delay {}ms, confirmation required: {}, session ttl {}s",
        config.app.verification.code_delay_ms,
        config.app.verification.require_confirmation,
        config.app.verification.session_ttl_seconds
    );

    let app_state = web::Data::new(AppState::new(sessions));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;
    purge_task.abort();
    result
}
