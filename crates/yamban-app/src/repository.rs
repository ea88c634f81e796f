//! The capability contract the endpoint layer depends on.

use std::collections::BTreeMap;
use thiserror::Error;
use yamban_core::{BoardError, NewTask, Settings, Task, TaskId, TaskPatch};

/// Storage-agnostic view of a board.
///
/// Not-found is reported as `None` (or `false` for [`delete`]); errors
/// are reserved for invalid input and storage failures, so callers can
/// map the three outcomes onto 404, 400, and 500 without inspecting
/// error strings.
///
/// [`delete`]: TaskRepository::delete
pub trait TaskRepository {
    /// Store a new task, assigning id and timestamps.
    ///
    /// # Errors
    /// [`RepositoryError::Invalid`] when required fields are missing,
    /// [`RepositoryError::Storage`] when persisting fails.
    fn save(&mut self, draft: NewTask) -> Result<Task, RepositoryError>;

    /// Fetch a task by id; no side effects.
    fn get(&self, id: &TaskId) -> Option<Task>;

    /// Snapshot of every task in insertion order.
    fn all(&self) -> Vec<Task>;

    /// Move a task to another column, maintaining the closed-timestamp
    /// invariant.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when persisting fails.
    fn update_status(&mut self, id: &TaskId, status: &str)
    -> Result<Option<Task>, RepositoryError>;

    /// Replace a task's text.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when persisting fails.
    fn update_text(&mut self, id: &TaskId, text: &str) -> Result<Option<Task>, RepositoryError>;

    /// Replace a task's tags.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when persisting fails.
    fn update_tags(
        &mut self,
        id: &TaskId,
        tags: Vec<String>,
    ) -> Result<Option<Task>, RepositoryError>;

    /// Replace a task's ordering hint.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when persisting fails.
    fn update_order(&mut self, id: &TaskId, order: i64) -> Result<Option<Task>, RepositoryError>;

    /// Remove a task; `false` when the id is unknown.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when persisting fails.
    fn delete(&mut self, id: &TaskId) -> Result<bool, RepositoryError>;

    /// Apply partial updates to every task whose id appears in
    /// `changes`, persisting once at the end. Unknown ids are skipped
    /// silently; the returned tasks are the ones actually mutated, in
    /// store order.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when persisting fails.
    fn batch_update(
        &mut self,
        changes: BTreeMap<TaskId, TaskPatch>,
    ) -> Result<Vec<Task>, RepositoryError>;

    /// Current board settings.
    fn settings(&self) -> Settings;

    /// Shallow-merge `partial` into the settings and return the merged
    /// whole.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when persisting fails.
    fn update_settings(&mut self, partial: Settings) -> Result<Settings, RepositoryError>;
}

/// Errors surfaced by [`TaskRepository`] implementations.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The incoming record failed validation.
    #[error(transparent)]
    Invalid(#[from] BoardError),

    /// The backing store failed to read or persist state. For YAML
    /// boards the in-memory mutation is already applied at this point;
    /// memory and disk disagree until the next successful write.
    #[error("storage error: {0}")]
    Storage(#[source] anyhow::Error),
}
