//! Error handling for the rendering pipeline.
//!
//! Draw-call failures mirror what the CAD host raises: duplicate or
//! unknown shape names and degenerate geometry.

use planarkit_core::GeometryError;
use planarkit_design::DesignError;
use thiserror::Error;

/// Rendering error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A shape with this name already exists in the modeler
    #[error("Duplicate shape name: {name:?}")]
    DuplicateShapeName {
        /// The colliding shape name.
        name: String,
    },

    /// A draw call referenced a shape that does not exist
    #[error("Unknown shape: {name:?}")]
    UnknownShape {
        /// The missing shape name.
        name: String,
    },

    /// A swept path starts with a zero-length segment
    #[error("Path {shape:?} has a zero-length first segment, cannot sweep")]
    DegeneratePath {
        /// The shape that could not be swept.
        shape: String,
    },

    /// Geometric precondition violated
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Design lookup or validation failed
    #[error(transparent)]
    Design(#[from] DesignError),
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
