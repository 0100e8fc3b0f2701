// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod auth;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use auth::JwtManager;
use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration (reads .env as well)
    let config = Config::from_env();

    // 2. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        anyhow::bail!("invalid configuration: {}", e);
    }

    log::info!("Starting event-listings service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{} (API under {})",
        config.server_address,
        config.server_port,
        config.api_prefix
    );

    // 3. Initialize database connection pool
    let pool = config::init_db_pool(&config)
        .await
        .context("failed to connect to database")?;

    // 4. Token signing shared by every worker
    let jwt = web::Data::new(JwtManager::new(&config.jwt_secret, config.jwt_ttl_seconds));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let api_prefix = config.api_prefix.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(jwt.clone())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            .configure(handlers::health_config)
            .configure(handlers::api_config(api_prefix.clone()))
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await
    .context("server terminated with an error")?;

    log::info!("Server stopped");
    Ok(())
}
