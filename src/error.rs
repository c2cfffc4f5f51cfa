//! Error types for the maze solver crate

use thiserror::Error;

use crate::grid::{Coord, Endpoint};

/// Main error type for the maze solver crate
///
/// A missing path is not an error: solvers report it as
/// [`crate::SearchOutcome::NotFound`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("maze has no {endpoint} cell")]
    MissingEndpoint { endpoint: Endpoint },

    #[error("maze has more than one {endpoint} cell: {first} and {second}")]
    DuplicateEndpoint {
        endpoint: Endpoint,
        first: Coord,
        second: Coord,
    },

    #[error("maze has no cells")]
    EmptyGrid,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
