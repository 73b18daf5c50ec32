//! Todo-Env Backend
//!
//! - config: settings from defaults, `server.toml` and env overrides
//! - env_vars: the environment snapshot served to the inspector page
//! - router: `/api/env`, `/healthz` and the built frontend

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod env_vars;

#[cfg(test)]
mod tests;

use config::Settings;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<BTreeMap<String, String>>,
}

impl AppState {
    pub fn new(env: BTreeMap<String, String>) -> Self {
        Self { env: Arc::new(env) }
    }
}

async fn get_env(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.env.as_ref().clone())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "not found" })),
    )
}

/// Client routes such as `/env` fall back to `index.html`.
pub fn build_router(state: AppState, dist_dir: &Path) -> Router {
    let frontend = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/api/env", get(get_env))
        .route("/api/*rest", any(api_not_found))
        .route("/healthz", get(healthz))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let env = env_vars::exposed_vars(env_vars::process_vars(), &settings);
    info!(count = env.len(), expose_all = settings.expose_all, "captured environment snapshot");
    if !settings.dist_dir.join("index.html").exists() {
        let _ = rolling_logger::warn(&format!(
            "No index.html in {}, only the API will be useful",
            settings.dist_dir.display()
        ));
    }

    let app = build_router(AppState::new(env), &settings.dist_dir);

    let listener = TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind))?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let _ = rolling_logger::info("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        let _ = rolling_logger::error(&format!("Failed to listen for shutdown signal: {}", e));
    }
}
