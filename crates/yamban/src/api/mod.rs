//! HTTP surface consumed by the board front-end.
//!
//! Every endpoint is a thin mapping onto the repository contract; the
//! only state is the repository itself behind one mutex, which is the
//! mutual-exclusion region covering read, mutate, and persist.

mod dto;
mod error;
mod settings;
mod tasks;

use std::sync::Arc;

use anyhow::Context as _;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use yamban_app::TaskRepository;

/// Shared handler state: the repository behind the single mutation lock.
pub struct AppState<R> {
    repo: Arc<Mutex<R>>,
}

impl<R> AppState<R> {
    /// Wrap a repository for the router.
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
        }
    }
}

// Manual impl: the state is clonable regardless of whether R is.
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

/// Build the API router over any repository implementation.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: TaskRepository + Send + 'static,
{
    Router::new()
        .route(
            "/api/tasks",
            get(tasks::list::<R>)
                .post(tasks::create::<R>)
                .patch(tasks::batch_update::<R>),
        )
        .route(
            "/api/tasks/{id}",
            patch(tasks::update_status::<R>).delete(tasks::remove::<R>),
        )
        .route("/api/tasks/{id}/text", patch(tasks::update_text::<R>))
        .route("/api/tasks/{id}/tags", patch(tasks::update_tags::<R>))
        .route("/api/tags/suggestions", get(tasks::tag_suggestions::<R>))
        .route(
            "/api/settings",
            get(settings::get_settings::<R>).patch(settings::update_settings::<R>),
        )
        .route("/api/health", get(health))
        .with_state(state)
}

/// Availability probe reported to the front-end bootstrap. Touches no
/// store state.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    server: &'static str,
    available: bool,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        server: "cli",
        available: true,
    })
}

/// Bind and serve until ctrl-c.
///
/// # Errors
/// Returns an error when the listener cannot bind or the server fails.
pub async fn serve<R>(repo: R, host: &str, port: u16) -> anyhow::Result<()>
where
    R: TaskRepository + Send + 'static,
{
    let app = router(AppState::new(repo)).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    tracing::info!(host, port, "serving board");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::warn!(error = %err, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    }
}
