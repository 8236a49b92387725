//! # Inkwell Blog Server
//!
//! Serves the blog as HTML pages and as a JSON API from one in-memory post store.

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use middleware::ErrorBoundary;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        host = %config.host,
        port = config.port,
        static_dir = ?config.static_dir,
        api_prefixes = ?config.api_prefixes,
        max_body_bytes = config.max_body_bytes,
        "Starting Inkwell blog server"
    );

    let state = AppState::new();
    let policy = config.error_policy();
    let static_dir = config.static_dir.clone();
    let max_body_bytes = config.max_body_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap(ErrorBoundary::new(policy.clone()))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .service(Files::new("/static", &static_dir))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
