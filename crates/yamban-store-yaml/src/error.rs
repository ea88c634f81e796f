//! Error types for board file operations.

use thiserror::Error;

/// Errors that can occur during [`BoardFile`](crate::BoardFile)
/// operations.
#[derive(Error, Debug)]
pub enum YamlStoreError {
    /// I/O operation failed. An absent file is not an error; it reads as
    /// an empty board.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document exists but is not valid YAML.
    #[error("failed to parse board document: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// The board could not be serialized back to YAML.
    #[error("failed to serialize board document: {0}")]
    Serialize(#[source] serde_yaml::Error),
}
