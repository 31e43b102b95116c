//! # planarkit Core
//!
//! Core types and utilities for planarkit.
//! Provides length-unit parsing, 2-D/3-D geometry primitives, the
//! fillet-eligibility filter, message severities, and the shared error types.

pub mod error;
pub mod fillet;
pub mod geometry;
pub mod message;
pub mod units;

pub use error::{Error, GeometryError, Result, UnitsError};
pub use fillet::{bad_fillet_indices, good_fillet_indices, round_to_precision, toggle_indices};
pub use geometry::{bounds, is_rectangle, to_vec3d, Bounds, Point, Point3};
pub use message::{Message, MessageLevel};
pub use units::{format_length, parse_units, Unit};
