use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        chat::{chat_route::chat_route, search_route::search_route},
        corpus::save_content_route::{save_content_route, save_html_route},
        forms::{inquiry_route::inquiry_route, save_csv_route::save_csv_route},
        health_route::health_route,
    },
};

const DEFAULT_ADDRESS: &str = "127.0.0.1:3003";

/// All routes with their middleware, bound to `state`.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_route))
        .route("/api/chat", post(chat_route))
        .route("/api/search", post(search_route))
        .route("/api/send-inquiry", post(inquiry_route))
        .route("/save-to-csv", post(save_csv_route))
        .route("/save-content", post(save_content_route))
        .route("/save-content/html", post(save_html_route))
        .layer(middleware::from_fn(json_error_mapper))
        .layer(cors)
        .with_state(state)
}

pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| DEFAULT_ADDRESS.to_string());
    let state = Arc::new(AppState::from_env().await?);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "api listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("api stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed. If the handler cannot be installed the
/// server keeps running until killed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
