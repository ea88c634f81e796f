//! Repository abstraction over yamban boards.
//!
//! The HTTP layer depends on [`TaskRepository`] only; backends differ in
//! persistence. [`InMemoryTaskRepository`] serves tests and demo mode,
//! [`YamlTaskRepository`] backs real boards with a single YAML file.

pub mod in_memory;
pub mod repository;
pub mod yaml;

pub use in_memory::InMemoryTaskRepository;
pub use repository::{RepositoryError, TaskRepository};
pub use yaml::YamlTaskRepository;
