//! Settings endpoints.

use axum::Json;
use axum::extract::State;
use yamban_app::TaskRepository;
use yamban_core::Settings;

use super::AppState;
use super::error::ApiError;

/// `GET /api/settings`
pub async fn get_settings<R>(State(state): State<AppState<R>>) -> Json<Settings>
where
    R: TaskRepository + Send + 'static,
{
    let repo = state.repo.lock().await;
    Json(repo.settings())
}

/// `PATCH /api/settings`
pub async fn update_settings<R>(
    State(state): State<AppState<R>>,
    Json(partial): Json<Settings>,
) -> Result<Json<Settings>, ApiError>
where
    R: TaskRepository + Send + 'static,
{
    let mut repo = state.repo.lock().await;
    Ok(Json(repo.update_settings(partial)?))
}
