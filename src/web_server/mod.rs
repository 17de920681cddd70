//! HTTP server initialization and routing

use axum::{routing::get, Json, Router};
use log::{error, info};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::shared::state::AppState;

pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({"data": {"name": "Drew"}}))
}

pub async fn about() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "About page"}))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "ticketserver",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/health", get(health_check))
        .merge(crate::tickets::configure_tickets_routes())
        .merge(crate::comments::configure_comments_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> std::io::Result<()> {
    let host = state.config.server.host.clone();
    let port = state.config.server.port;
    let app = build_router(state);

    let listener = match tokio::net::TcpListener::bind((host.as_str(), port)).await {
        Ok(l) => l,
        Err(e) => {
            error!(
                "Failed to bind to {}:{}: {} - is another instance running?",
                host, port, e
            );
            return Err(e);
        }
    };
    info!("HTTP server listening on {}:{}", host, port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutting down HTTP server...");
}
