//! Domain types and board mutation semantics for yamban.
//!
//! Everything that gives a board its behavior lives here: task records,
//! identifier assignment, timestamp lifecycle, settings merging. The
//! crate is persistence-agnostic; storage backends adopt a [`Board`] and
//! decide when to write its [`BoardDocument`] snapshot somewhere.

/// Board state and mutation operations.
pub mod board;
/// Timestamp helpers.
pub mod clock;
/// Errors produced by board mutations.
pub mod error;
/// Identifier types.
pub mod id;
/// Board-level settings mapping.
pub mod settings;
/// Task records and partial updates.
pub mod task;

pub use board::{Board, BoardDocument};
pub use error::BoardError;
pub use id::TaskId;
pub use settings::Settings;
pub use task::{DONE_STATUS, NewTask, Task, TaskKind, TaskPatch};
