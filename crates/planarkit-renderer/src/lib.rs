//! # planarkit Renderer
//!
//! Walks a design's element tables and issues draw calls against a
//! modeler: the call surface is the [`Modeler`] trait, calls are recorded
//! as [`ModelerOp`] values, and [`ScriptWriter`] turns an op sequence
//! into an automation script for the CAD host.

pub mod error;
pub mod modeler;
pub mod ops;
pub mod renderer;
pub mod script;

pub use error::{RenderError, Result};
pub use modeler::{BoxStyle, DrawOptions, Modeler};
pub use ops::{ModelerOp, RecordingModeler};
pub use renderer::{DesignRenderer, NAME_DELIM};
pub use script::ScriptWriter;
