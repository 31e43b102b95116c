//! Error handling for planarkit core types.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Length-unit parsing error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitsError {
    /// Input string was empty or whitespace
    #[error("Empty length string")]
    Empty,

    /// Magnitude could not be parsed as a number
    #[error("Invalid number in length string: {input:?}")]
    InvalidNumber {
        /// The input that failed to parse.
        input: String,
    },

    /// Unit suffix was not recognized
    #[error("Unknown length unit: {unit:?}")]
    UnknownUnit {
        /// The unrecognized suffix.
        unit: String,
    },
}

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Vertex list is shorter than an operation requires
    #[error("Too few vertices: needed {needed}, got {got}")]
    TooFewVertices {
        /// Minimum number of vertices required.
        needed: usize,
        /// Number of vertices provided.
        got: usize,
    },
}

/// Top-level core error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Unit parsing failed
    #[error(transparent)]
    Units(#[from] UnitsError),

    /// Geometric precondition violated
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
