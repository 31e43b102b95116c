//! # planarkit
//!
//! Renders planar superconducting-circuit designs into modeler scripts
//! for electromagnetic simulation.
//!
//! ## Architecture
//!
//! planarkit is organized as a workspace with multiple crates:
//!
//! 1. **planarkit-core** - Units, geometry primitives, fillet eligibility
//! 2. **planarkit-design** - Chips, element tables, design files
//! 3. **planarkit-renderer** - Modeler boundary, render pipeline, script emission
//! 4. **planarkit** - Main binary that integrates all crates

pub use planarkit_design as design;
pub use planarkit_renderer as renderer;

pub use planarkit_core::{
    bad_fillet_indices, good_fillet_indices, parse_units, toggle_indices, Message, MessageLevel,
    Point, Point3, Unit,
};
pub use planarkit_design::{load_design, save_design, Design, DesignError};
pub use planarkit_renderer::{
    DesignRenderer, Modeler, ModelerOp, RecordingModeler, RenderError, ScriptWriter,
};

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
