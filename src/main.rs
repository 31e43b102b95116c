use anyhow::{bail, Context, Result};
use planarkit::init_logging;
use planarkit_core::MessageLevel;
use planarkit_design::load_design;
use planarkit_renderer::{DesignRenderer, RecordingModeler, ScriptWriter};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    init_logging()?;
    info!(
        "planarkit {} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE")
    );

    let mut args = std::env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (PathBuf::from(input), PathBuf::from(output)),
        _ => bail!("Usage: planarkit <design file> <output script> [component ...]"),
    };
    let selection: Vec<String> = args.collect();

    let design = load_design(&input)?;
    let mut renderer = DesignRenderer::new(&design, RecordingModeler::new());
    renderer
        .render_design(&selection)
        .with_context(|| format!("Failed to render design {:?}", design.name()))?;
    renderer.add_message(
        MessageLevel::Info,
        &format!("Design {} rendered by planarkit", design.name()),
    );

    let modeler = renderer.into_modeler();
    let script = ScriptWriter::new(design.name()).generate(modeler.ops());
    std::fs::write(&output, script)
        .with_context(|| format!("Failed to write script: {}", output.display()))?;

    info!(
        shapes = modeler.shape_names().len(),
        draw_calls = modeler.ops().len(),
        "Wrote modeler script to {}",
        output.display()
    );
    Ok(())
}
