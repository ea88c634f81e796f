use crate::id::TaskId;
use serde::{Deserialize, Serialize};

/// Status value that drives the closed-timestamp lifecycle. All other
/// status values are opaque column keys defined by board settings.
pub const DONE_STATUS: &str = "done";

/// Classification of a task, carried for the front-end's badges.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Routine maintenance.
    Chore,
    /// New functionality.
    Feature,
    /// Defect to fix.
    Bug,
    /// Large multi-task effort.
    Epic,
    /// External request.
    Request,
    /// Exploratory work.
    Experiment,
}

/// A single kanban card as stored in the board document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (`K-001` style).
    pub id: TaskId,
    /// Card text; may contain markdown. Empty is allowed.
    #[serde(default)]
    pub text: String,
    /// Column key (`todo`, `in_progress`, `done`, or any configured column).
    pub status: String,
    /// Free-form tags; order preserved, duplicates untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Intra-column ordering hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// RFC 3339 instant of first save; never changes afterwards.
    #[serde(default)]
    pub created: String,
    /// RFC 3339 instant of the latest mutation.
    #[serde(default)]
    pub updated: String,
    /// RFC 3339 instant of the latest transition into `done`.
    /// Present if and only if `status == "done"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<String>,
    /// Task classification.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaskKind>,
}

impl Task {
    /// Overwrite the status, maintaining the closed-timestamp invariant:
    /// `closed` is set (or refreshed) on every transition into
    /// [`DONE_STATUS`] and cleared on any other status.
    pub fn apply_status(&mut self, status: &str, now: &str) {
        self.status = status.to_owned();
        self.closed = (self.status == DONE_STATUS).then(|| now.to_owned());
    }

    /// Shallow-apply a partial update. Fields absent from the patch are
    /// left alone; a status change goes through [`Self::apply_status`].
    pub fn apply_patch(&mut self, patch: &TaskPatch, now: &str) {
        if let Some(text) = &patch.text {
            self.text.clone_from(text);
        }
        if let Some(status) = &patch.status {
            self.apply_status(status, now);
        }
        if let Some(tags) = &patch.tags {
            self.tags.clone_from(tags);
        }
        if let Some(order) = patch.order {
            self.order = Some(order);
        }
        if let Some(kind) = patch.kind {
            self.kind = Some(kind);
        }
    }
}

/// Payload for creating a task; the board fills in whatever is absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewTask {
    /// Explicit id; generated from the board counter when `None`.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Card text.
    #[serde(default)]
    pub text: String,
    /// Initial column key. Required; the board rejects an empty value.
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

impl NewTask {
    /// Draft with the given text and column.
    #[must_use]
    pub fn new(text: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: status.into(),
            ..Self::default()
        }
    }

    /// Attach tags to the draft.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Force a specific id instead of a generated one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Partial attributes applied by batch updates: every mutable task field
/// as an option.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement text.
    #[serde(default)]
    pub text: Option<String>,
    /// Replacement status (triggers the closed transition).
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

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn task(status: &str) -> Task {
        Task {
            id: TaskId::from("K-001"),
            text: "card".to_owned(),
            status: status.to_owned(),
            tags: Vec::new(),
            order: None,
            created: "2024-01-01T00:00:00Z".to_owned(),
            updated: "2024-01-01T00:00:00Z".to_owned(),
            closed: None,
            kind: None,
        }
    }

    #[test]
    fn status_into_done_sets_closed() {
        let mut card = task("todo");
        card.apply_status("done", "2024-01-02T00:00:00Z");
        assert_eq!(card.status, "done");
        assert_eq!(card.closed.as_deref(), Some("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn status_out_of_done_clears_closed() {
        let mut card = task("done");
        card.closed = Some("2024-01-02T00:00:00Z".to_owned());
        card.apply_status("todo", "2024-01-03T00:00:00Z");
        assert_eq!(card.status, "todo");
        assert_eq!(card.closed, None);
    }

    #[test]
    fn repeated_done_refreshes_closed() {
        let mut card = task("done");
        card.closed = Some("2024-01-02T00:00:00Z".to_owned());
        card.apply_status("done", "2024-01-05T00:00:00Z");
        assert_eq!(card.closed.as_deref(), Some("2024-01-05T00:00:00Z"));
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut card = task("todo");
        card.tags = vec!["keep".to_owned()];
        let patch = TaskPatch {
            text: Some("rewritten".to_owned()),
            order: Some(3),
            ..TaskPatch::default()
        };
        card.apply_patch(&patch, "2024-01-04T00:00:00Z");

        assert_eq!(card.text, "rewritten");
        assert_eq!(card.order, Some(3));
        assert_eq!(card.status, "todo");
        assert_eq!(card.tags, vec!["keep".to_owned()]);
    }

    #[test]
    fn patch_with_status_runs_the_closed_transition() {
        let mut card = task("todo");
        let patch = TaskPatch {
            status: Some("done".to_owned()),
            ..TaskPatch::default()
        };
        card.apply_patch(&patch, "2024-01-04T00:00:00Z");
        assert_eq!(card.closed.as_deref(), Some("2024-01-04T00:00:00Z"));
    }

    #[test]
    fn kind_serializes_as_type() {
        let mut card = task("todo");
        card.kind = Some(TaskKind::Bug);
        let json = serde_json::to_value(&card).expect("serialize task");
        assert_eq!(json["type"], "bug");
    }
}
