//! Volatile repository used by tests and demo mode.

use std::collections::BTreeMap;
use yamban_core::{Board, NewTask, Settings, Task, TaskId, TaskPatch};

use crate::repository::{RepositoryError, TaskRepository};

/// Repository with no persistence: the board lives and dies with the
/// process. Semantics are identical to the YAML-backed variant minus
/// the disk writes.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    board: Board,
}

impl InMemoryTaskRepository {
    /// Empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the demo board.
    #[must_use]
    pub fn with_demo_tasks() -> Self {
        let demo: [(&str, &str, &[&str]); 7] = [
            ("Write documentation", "todo", &["docs", "writing"]),
            ("Design UI mockups", "todo", &["design"]),
            ("Set up CI/CD", "todo", &["devops"]),
            (
                "Implement markdown rendering",
                "in_progress",
                &["backend", "markdown"],
            ),
            ("Add CLI options", "in_progress", &["cli"]),
            ("Initialize project", "done", &["setup"]),
            ("Create README", "done", &["docs"]),
        ];

        let mut repo = Self::new();
        for (text, status, tags) in demo {
            let draft = NewTask::new(text, status)
                .with_tags(tags.iter().map(ToString::to_string).collect());
            // Every demo draft carries a status, so create cannot fail.
            let _ = repo.board.create(draft);
        }
        repo
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn save(&mut self, draft: NewTask) -> Result<Task, RepositoryError> {
        Ok(self.board.create(draft)?)
    }

    fn get(&self, id: &TaskId) -> Option<Task> {
        self.board.get(id).cloned()
    }

    fn all(&self) -> Vec<Task> {
        self.board.tasks().to_vec()
    }

    fn update_status(
        &mut self,
        id: &TaskId,
        status: &str,
    ) -> Result<Option<Task>, RepositoryError> {
        Ok(self.board.update_status(id, status))
    }

    fn update_text(&mut self, id: &TaskId, text: &str) -> Result<Option<Task>, RepositoryError> {
        Ok(self.board.update_text(id, text))
    }

    fn update_tags(
        &mut self,
        id: &TaskId,
        tags: Vec<String>,
    ) -> Result<Option<Task>, RepositoryError> {
        Ok(self.board.update_tags(id, tags))
    }

    fn update_order(&mut self, id: &TaskId, order: i64) -> Result<Option<Task>, RepositoryError> {
        Ok(self.board.update_order(id, order))
    }

    fn delete(&mut self, id: &TaskId) -> Result<bool, RepositoryError> {
        Ok(self.board.delete(id))
    }

    fn batch_update(
        &mut self,
        changes: BTreeMap<TaskId, TaskPatch>,
    ) -> Result<Vec<Task>, RepositoryError> {
        Ok(self.board.apply_patches(&changes))
    }

    fn settings(&self) -> Settings {
        self.board.settings().clone()
    }

    fn update_settings(&mut self, partial: Settings) -> Result<Settings, RepositoryError> {
        Ok(self.board.merge_settings(partial))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn demo_board_matches_the_seed_list() {
        let repo = InMemoryTaskRepository::with_demo_tasks();
        let tasks = repo.all();
        assert_eq!(tasks.len(), 7);
        assert_eq!(tasks[0].id, TaskId::from("K-001"));
        assert_eq!(tasks[6].id, TaskId::from("K-007"));
        assert_eq!(tasks[0].text, "Write documentation");
        assert!(tasks.iter().filter(|t| t.status == "done").count() == 2);
        assert!(
            tasks
                .iter()
                .all(|t| (t.status == "done") == t.closed.is_some())
        );
    }

    #[test]
    fn save_and_get_round_trip() {
        let mut repo = InMemoryTaskRepository::new();
        let saved = repo
            .save(NewTask::new("Test task", "todo").with_tags(vec!["unit".to_owned()]))
            .expect("save");
        let fetched = repo.get(&saved.id).expect("task must exist");
        assert_eq!(fetched, saved);
    }

    #[test]
    fn missing_status_is_invalid() {
        let mut repo = InMemoryTaskRepository::new();
        let err = repo.save(NewTask::new("card", "")).expect_err("must fail");
        assert!(matches!(err, RepositoryError::Invalid(_)));
    }

    #[test]
    fn unknown_id_is_a_sentinel_not_an_error() {
        let mut repo = InMemoryTaskRepository::new();
        let missing = TaskId::from("K-999");
        assert!(repo.get(&missing).is_none());
        assert!(
            repo.update_status(&missing, "done")
                .expect("no storage involved")
                .is_none()
        );
        assert!(!repo.delete(&missing).expect("no storage involved"));
    }

    #[test]
    fn settings_start_empty_and_merge() {
        let mut repo = InMemoryTaskRepository::new();
        assert!(repo.settings().is_empty());

        let merged = repo
            .update_settings(
                [("theme".to_owned(), serde_json::json!("dark"))]
                    .into_iter()
                    .collect(),
            )
            .expect("merge settings");
        assert_eq!(merged.get("theme"), Some(&serde_json::json!("dark")));
    }
}
