use crate::clock;
use crate::error::BoardError;
use crate::id::{self, TaskId};
use crate::settings::Settings;
use crate::task::{DONE_STATUS, NewTask, Task, TaskPatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk shape of a board: settings plus the task list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    /// Board-level configuration.
    #[serde(default)]
    pub settings: Settings,
    /// All tasks in insertion order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// In-memory board state: the document content plus the derived id
/// counter. The board owns every mutation rule — id assignment,
/// timestamp stamping, the closed transition — so storage backends stay
/// behaviorally identical.
#[derive(Clone, Debug)]
pub struct Board {
    settings: Settings,
    tasks: Vec<Task>,
    counter: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            tasks: Vec::new(),
            counter: 1,
        }
    }
}

impl Board {
    /// Empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a loaded document, deriving the id counter as one past the
    /// highest `K-<digits>` suffix present.
    #[must_use]
    pub fn from_document(doc: BoardDocument) -> Self {
        let counter = id::next_sequence(doc.tasks.iter().map(|task| &task.id));
        Self {
            settings: doc.settings,
            tasks: doc.tasks,
            counter,
        }
    }

    /// Snapshot the board into its serializable document form.
    #[must_use]
    pub fn to_document(&self) -> BoardDocument {
        BoardDocument {
            settings: self.settings.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Store a new task: assign an id when absent, stamp
    /// `created == updated`, apply the closed invariant, append.
    ///
    /// # Errors
    /// Returns [`BoardError::MissingField`] when the draft has an empty
    /// status.
    pub fn create(&mut self, draft: NewTask) -> Result<Task, BoardError> {
        if draft.status.is_empty() {
            return Err(BoardError::MissingField("status"));
        }

        let NewTask {
            id,
            text,
            status,
            tags,
            order,
            kind,
        } = draft;

        let now = clock::now();
        let closed = (status == DONE_STATUS).then(|| now.clone());
        let task = Task {
            id: id.unwrap_or_else(|| TaskId::from_sequence(self.counter)),
            text,
            status,
            tags,
            order,
            created: now.clone(),
            updated: now,
            closed,
            kind,
        };
        self.tasks.push(task.clone());
        self.bump_counter();
        Ok(task)
    }

    /// Fetch a task by id; no side effects.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Every task in insertion order. The board never sorts; `order` is
    /// a hint for the presentation layer.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current board settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Move a task to another column; `None` when the id is unknown.
    pub fn update_status(&mut self, id: &TaskId, status: &str) -> Option<Task> {
        let now = clock::now();
        let task = self.find_mut(id)?;
        task.apply_status(status, &now);
        task.updated = now;
        Some(task.clone())
    }

    /// Replace a task's text; `None` when the id is unknown.
    pub fn update_text(&mut self, id: &TaskId, text: &str) -> Option<Task> {
        let now = clock::now();
        let task = self.find_mut(id)?;
        task.text = text.to_owned();
        task.updated = now;
        Some(task.clone())
    }

    /// Replace a task's tags; `None` when the id is unknown.
    pub fn update_tags(&mut self, id: &TaskId, tags: Vec<String>) -> Option<Task> {
        let now = clock::now();
        let task = self.find_mut(id)?;
        task.tags = tags;
        task.updated = now;
        Some(task.clone())
    }

    /// Replace a task's ordering hint; `None` when the id is unknown.
    pub fn update_order(&mut self, id: &TaskId, order: i64) -> Option<Task> {
        let now = clock::now();
        let task = self.find_mut(id)?;
        task.order = Some(order);
        task.updated = now;
        Some(task.clone())
    }

    /// Shallow-apply each patch to the task carrying its id, in store
    /// order. Ids without a matching task are skipped silently; the
    /// returned list holds exactly the tasks that were mutated.
    pub fn apply_patches(&mut self, changes: &BTreeMap<TaskId, TaskPatch>) -> Vec<Task> {
        let now = clock::now();
        let mut updated = Vec::new();
        for task in &mut self.tasks {
            if let Some(patch) = changes.get(&task.id) {
                task.apply_patch(patch, &now);
                task.updated.clone_from(&now);
                updated.push(task.clone());
            }
        }
        updated
    }

    /// Remove the first task with the given id; `false` when absent.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        self.tasks
            .iter()
            .position(|task| &task.id == id)
            .map(|index| self.tasks.remove(index))
            .is_some()
    }

    /// Shallow-merge `partial` into the settings and return the merged
    /// whole.
    pub fn merge_settings(&mut self, partial: Settings) -> Settings {
        self.settings.merge(partial);
        self.settings.clone()
    }

    // The counter only moves forward: a delete must not recycle the id
    // of the removed task.
    fn bump_counter(&mut self) {
        let derived = id::next_sequence(self.tasks.iter().map(|task| &task.id));
        self.counter = self.counter.max(derived);
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }
}
