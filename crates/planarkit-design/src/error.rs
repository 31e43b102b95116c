//! Error handling for the design database.

use planarkit_core::UnitsError;
use thiserror::Error;

/// Design database error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// Referenced chip does not exist in the design
    #[error("Unknown chip: {chip:?}")]
    UnknownChip {
        /// The chip name that was not found.
        chip: String,
    },

    /// Referenced component is not registered in the design
    #[error("Unknown component: {component:?}")]
    UnknownComponent {
        /// The component name that was not found.
        component: String,
    },

    /// Component name already registered
    #[error("Duplicate component: {component:?}")]
    DuplicateComponent {
        /// The component name that already exists.
        component: String,
    },

    /// A chip or option dimension string failed to parse
    #[error("Invalid dimension in {field}: {source}")]
    InvalidDimension {
        /// Dotted path of the offending field, e.g. `main.center_z`.
        field: String,
        /// The underlying parse failure.
        #[source]
        source: UnitsError,
    },

    /// Renderer options failed validation
    #[error("Invalid renderer options: {reason}")]
    InvalidOptions {
        /// Why the options were rejected.
        reason: String,
    },
}

/// Result type alias for design operations
pub type Result<T> = std::result::Result<T, DesignError>;
