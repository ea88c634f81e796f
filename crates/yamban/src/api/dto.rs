//! Request and response bodies.
//!
//! The boundary renames the internal timestamp fields (`created`,
//! `updated`, `closed`) to the wire names (`created_at`, `updated_at`,
//! `closed_at`). The rename is purely lexical.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use yamban_core::{NewTask, Task, TaskKind, TaskPatch};

/// Task as seen by the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: String,
    /// Card text.
    pub text: String,
    /// Column key.
    pub status: String,
    /// Tags in stored order.
    pub tags: Vec<String>,
    /// Intra-column ordering hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Creation instant.
    pub created_at: String,
    /// Latest mutation instant.
    pub updated_at: String,
    /// Latest transition into `done`, when currently done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
    /// Task classification.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaskKind>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            text: task.text,
            status: task.status,
            tags: task.tags,
            order: task.order,
            created_at: task.created,
            updated_at: task.updated,
            closed_at: task.closed,
            kind: task.kind,
        }
    }
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Deserialize)]
pub struct CreateTaskBody {
    /// Card text; defaults to empty.
    #[serde(default)]
    pub text: String,
    /// Initial column key.
    pub status: String,
    /// Initial tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Initial ordering hint.
    #[serde(default)]
    pub order: Option<i64>,
    /// Task classification.
    #[serde(rename = "type", default)]
    pub kind: Option<TaskKind>,
}

impl From<CreateTaskBody> for NewTask {
    fn from(body: CreateTaskBody) -> Self {
        Self {
            id: None,
            text: body.text,
            status: body.status,
            tags: body.tags,
            order: body.order,
            kind: body.kind,
        }
    }
}

/// Body of `PATCH /api/tasks/{id}`.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    /// Target column key.
    pub status: String,
}

/// Body of `PATCH /api/tasks/{id}/text`.
#[derive(Debug, Deserialize)]
pub struct TextBody {
    /// Replacement card text.
    pub text: String,
}

/// Body of `PATCH /api/tasks/{id}/tags`.
#[derive(Debug, Deserialize)]
pub struct TagsBody {
    /// Replacement tags.
    pub tags: Vec<String>,
}

/// One entry of the batch `PATCH /api/tasks` body, keyed by task id.
#[derive(Debug, Default, Deserialize)]
pub struct PatchBody {
    /// Replacement text.
    #[serde(default)]
    pub text: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<String>,
    /// Replacement tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Replacement ordering hint.
    #[serde(default)]
    pub order: Option<i64>,
    /// Replacement classification.
    #[serde(rename = "type", default)]
    pub kind: Option<TaskKind>,
}

/// Full body of the batch `PATCH /api/tasks`.
pub type BatchBody = BTreeMap<String, PatchBody>;

impl From<PatchBody> for TaskPatch {
    fn from(body: PatchBody) -> Self {
        Self {
            text: body.text,
            status: body.status,
            tags: body.tags,
            order: body.order,
            kind: body.kind,
        }
    }
}

/// Body of a successful `DELETE /api/tasks/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always `true`; a missing id is a 404 instead.
    pub success: bool,
}
