//! Repository persisting the board to a single YAML document.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use yamban_core::{Board, NewTask, Settings, Task, TaskId, TaskPatch};
use yamban_store_yaml::{BoardFile, Notify, YamlStoreError};

use crate::repository::{RepositoryError, TaskRepository};

/// YAML-file-backed repository.
///
/// Memory is the source of truth between writes; every mutation rewrites
/// the whole document through [`BoardFile`]. When a write fails the
/// in-memory mutation is kept, so memory and disk disagree until the
/// next successful write — callers should treat a storage error as
/// fatal for the current request.
#[derive(Debug)]
pub struct YamlTaskRepository {
    board: Board,
    file: BoardFile,
}

impl YamlTaskRepository {
    /// Load the board from `path`, starting empty when the file is
    /// absent.
    ///
    /// # Errors
    /// [`RepositoryError::Storage`] when the file exists but cannot be
    /// read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let file = BoardFile::open(path.as_ref());
        let doc = file.load().map_err(storage)?;
        Ok(Self {
            board: Board::from_document(doc),
            file,
        })
    }

    /// Signal fired after each successful persist.
    #[must_use]
    pub fn change_signal(&self) -> Arc<Notify> {
        self.file.change_signal()
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn persist(&self) -> Result<(), RepositoryError> {
        self.file.write(&self.board.to_document()).map_err(storage)
    }
}

fn storage(err: YamlStoreError) -> RepositoryError {
    RepositoryError::Storage(err.into())
}

impl TaskRepository for YamlTaskRepository {
    fn save(&mut self, draft: NewTask) -> Result<Task, RepositoryError> {
        let task = self.board.create(draft)?;
        self.persist()?;
        Ok(task)
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
        match self.board.update_status(id, status) {
            Some(task) => {
                self.persist()?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn update_text(&mut self, id: &TaskId, text: &str) -> Result<Option<Task>, RepositoryError> {
        match self.board.update_text(id, text) {
            Some(task) => {
                self.persist()?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn update_tags(
        &mut self,
        id: &TaskId,
        tags: Vec<String>,
    ) -> Result<Option<Task>, RepositoryError> {
        match self.board.update_tags(id, tags) {
            Some(task) => {
                self.persist()?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn update_order(&mut self, id: &TaskId, order: i64) -> Result<Option<Task>, RepositoryError> {
        match self.board.update_order(id, order) {
            Some(task) => {
                self.persist()?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn delete(&mut self, id: &TaskId) -> Result<bool, RepositoryError> {
        if self.board.delete(id) {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn batch_update(
        &mut self,
        changes: BTreeMap<TaskId, TaskPatch>,
    ) -> Result<Vec<Task>, RepositoryError> {
        let updated = self.board.apply_patches(&changes);
        self.persist()?;
        Ok(updated)
    }

    fn settings(&self) -> Settings {
        self.board.settings().clone()
    }

    fn update_settings(&mut self, partial: Settings) -> Result<Settings, RepositoryError> {
        let merged = self.board.merge_settings(partial);
        self.persist()?;
        Ok(merged)
    }
}
