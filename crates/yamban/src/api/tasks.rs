//! Task endpoints.

use std::collections::{BTreeMap, BTreeSet};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use yamban_app::TaskRepository;
use yamban_core::{TaskId, TaskPatch};

use super::AppState;
use super::dto::{
    BatchBody, CreateTaskBody, DeleteResponse, StatusBody, TagsBody, TaskResponse, TextBody,
};
use super::error::ApiError;

/// `GET /api/tasks`
pub async fn list<R>(State(state): State<AppState<R>>) -> Json<Vec<TaskResponse>>
where
    R: TaskRepository + Send + 'static,
{
    let repo = state.repo.lock().await;
    Json(repo.all().into_iter().map(TaskResponse::from).collect())
}

/// `POST /api/tasks`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + Send + 'static,
{
    if body.status.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing or invalid fields: status".to_owned(),
        ));
    }
    let mut repo = state.repo.lock().await;
    let task = repo.save(body.into())?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// `PATCH /api/tasks/{id}`
pub async fn update_status<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + Send + 'static,
{
    if body.status.is_empty() {
        return Err(ApiError::BadRequest("Missing status".to_owned()));
    }
    let id = TaskId::from(id);
    let mut repo = state.repo.lock().await;
    repo.update_status(&id, &body.status)?
        .map(|task| Json(task.into()))
        .ok_or_else(ApiError::task_not_found)
}

/// `PATCH /api/tasks/{id}/text`
pub async fn update_text<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(body): Json<TextBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + Send + 'static,
{
    if body.text.is_empty() {
        return Err(ApiError::BadRequest("Missing text".to_owned()));
    }
    let id = TaskId::from(id);
    let mut repo = state.repo.lock().await;
    repo.update_text(&id, &body.text)?
        .map(|task| Json(task.into()))
        .ok_or_else(ApiError::task_not_found)
}

/// `PATCH /api/tasks/{id}/tags`
pub async fn update_tags<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(body): Json<TagsBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + Send + 'static,
{
    let id = TaskId::from(id);
    let mut repo = state.repo.lock().await;
    repo.update_tags(&id, body.tags)?
        .map(|task| Json(task.into()))
        .ok_or_else(ApiError::task_not_found)
}

/// Batch `PATCH /api/tasks`
pub async fn batch_update<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<BatchBody>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + Send + 'static,
{
    let changes: BTreeMap<TaskId, TaskPatch> = body
        .into_iter()
        .map(|(id, patch)| (TaskId::from(id), TaskPatch::from(patch)))
        .collect();

    let mut repo = state.repo.lock().await;
    let updated = repo.batch_update(changes)?;
    Ok(Json(updated.into_iter().map(TaskResponse::from).collect()))
}

/// `DELETE /api/tasks/{id}`
pub async fn remove<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError>
where
    R: TaskRepository + Send + 'static,
{
    let id = TaskId::from(id);
    let mut repo = state.repo.lock().await;
    if repo.delete(&id)? {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::task_not_found())
    }
}

/// `GET /api/tags/suggestions`
pub async fn tag_suggestions<R>(State(state): State<AppState<R>>) -> Json<Vec<String>>
where
    R: TaskRepository + Send + 'static,
{
    let repo = state.repo.lock().await;
    let tags: BTreeSet<String> = repo
        .all()
        .into_iter()
        .flat_map(|task| task.tags)
        .collect();
    Json(tags.into_iter().collect())
}
