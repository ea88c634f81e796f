use thiserror::Error;

/// Errors produced by in-memory board mutations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// A required field was absent from the incoming record. The board
    /// never invents a value for it.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
