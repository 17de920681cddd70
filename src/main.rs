use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use ticketserver::config::AppConfig;
use ticketserver::shared::migration::run_migrations;
use ticketserver::shared::state::AppState;
use ticketserver::shared::utils::create_conn;
use ticketserver::web_server::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    let pool = match create_conn(&config.database.url) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to create database pool: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("Database pool creation failed: {}", e),
            ));
        }
    };

    let mut conn = pool.get().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            format!("Database connection failed: {}", e),
        )
    })?;
    run_migrations(&mut conn)
        .map_err(|e| std::io::Error::other(format!("Schema initialization failed: {}", e)))?;
    drop(conn);

    info!(
        "Starting HTTP server on {}:{}",
        config.server.host, config.server.port
    );
    let app_state = Arc::new(AppState { conn: pool, config });
    run_server(app_state).await
}
