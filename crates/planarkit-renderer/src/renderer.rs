//! The rendering pipeline.
//!
//! Walks the design's element tables and issues draw calls against a
//! [`Modeler`]: components first, then the chips they sit on, then the
//! ground-plane subtraction and metallization passes.

use crate::error::{RenderError, Result};
use crate::modeler::{BoxStyle, DrawOptions, Modeler};
use planarkit_core::{
    bounds, good_fillet_indices, is_rectangle, round_to_precision, to_vec3d, GeometryError,
    MessageLevel, Point, Point3,
};
use planarkit_design::{ComponentId, Design, DesignError, Element, ElementKind, Geometry};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Separator between component and element in shape names.
pub const NAME_DELIM: &str = "_";

/// Decimal digits the fillet radius itself is rounded to.
const FILLET_RADIUS_DIGITS: i32 = 7;

/// Renders a design into a modeler.
///
/// Shapes flagged `subtract` accumulate per chip and are cut out of that
/// chip's ground plane at the end of the pass; everything metallic
/// accumulates into one perfect-E assignment.
pub struct DesignRenderer<'a, M: Modeler> {
    design: &'a Design,
    modeler: M,
    chip_subtract: BTreeMap<String, BTreeSet<String>>,
    assign_perf_e: Vec<String>,
}

impl<'a, M: Modeler> DesignRenderer<'a, M> {
    /// Create a renderer over a design and a modeler handle.
    pub fn new(design: &'a Design, modeler: M) -> Self {
        Self {
            design,
            modeler,
            chip_subtract: BTreeMap::new(),
            assign_perf_e: Vec::new(),
        }
    }

    /// The modeler handle.
    pub fn modeler(&self) -> &M {
        &self.modeler
    }

    /// Consume the renderer, returning the modeler handle.
    pub fn into_modeler(self) -> M {
        self.modeler
    }

    /// Shape names queued for ground-plane subtraction, per chip.
    pub fn chip_subtract(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.chip_subtract
    }

    /// Shape names queued for metallization.
    pub fn metallize_queue(&self) -> &[String] {
        &self.assign_perf_e
    }

    /// Forward a message to the host's message manager.
    pub fn add_message(&mut self, level: MessageLevel, text: &str) {
        self.modeler.add_message(level, text);
    }

    /// Render the components in `selection` (everything when empty),
    /// then their chips, then subtract and metallize.
    pub fn render_design(&mut self, selection: &[String]) -> Result<()> {
        self.design.options.validate()?;
        self.chip_subtract.clear();
        self.assign_perf_e.clear();

        info!(design = self.design.name(), "Rendering design");
        self.render_tables(selection)?;
        self.render_chips()?;
        self.subtract_from_ground()?;
        self.metallize()?;
        Ok(())
    }

    /// Render components grouped by table kind.
    fn render_tables(&mut self, selection: &[String]) -> Result<()> {
        let ids = self.design.selection_ids(selection);
        for kind in ElementKind::ALL {
            self.render_components(kind, ids.as_ref())?;
        }
        Ok(())
    }

    /// Render one table's rows, masked by the component selection.
    fn render_components(
        &mut self,
        kind: ElementKind,
        ids: Option<&BTreeSet<ComponentId>>,
    ) -> Result<()> {
        let design = self.design;
        for row in design.tables.rows(kind) {
            if ids.map_or(true, |ids| ids.contains(&row.component)) {
                self.render_element(row)?;
            }
        }
        Ok(())
    }

    /// Render one table row, dispatching on its geometry.
    fn render_element(&mut self, row: &Element) -> Result<()> {
        match &row.geometry {
            Geometry::Polygon {
                exterior,
                interiors,
            } => self.render_element_poly(row, exterior, interiors),
            Geometry::LineString { points } => self.render_element_path(row, points),
        }
    }

    /// Render a closed polygon.
    fn render_element_poly(
        &mut self,
        row: &Element,
        exterior: &[Point],
        interiors: &[Vec<Point>],
    ) -> Result<()> {
        let options = DrawOptions::default();
        let name = shape_name(row.component, &row.name);
        let chip_z = self.design.chip_z(&row.chip)?;

        let rect_bounds = if is_rectangle(exterior) {
            bounds(exterior)
        } else {
            None
        };
        let drawn = if let Some((min_x, min_y, max_x, max_y)) = rect_bounds {
            debug!("Drawing a rectangle: {}", name);
            self.modeler.draw_rect_corner(
                Point3::new(min_x, min_y, chip_z),
                max_x - min_x,
                max_y - min_y,
                &options,
            )?
        } else {
            debug!("Drawing a closed polyline: {}", name);
            if exterior.len() < 3 {
                return Err(RenderError::Geometry(GeometryError::TooFewVertices {
                    needed: 3,
                    got: exterior.len(),
                }));
            }
            let points_3d = to_vec3d(exterior, chip_z);
            self.modeler.draw_polyline(&points_3d, true, &options)?
        };
        self.modeler.rename(&drawn, &name)?;

        self.apply_fillet(row, exterior, true, &name)?;

        // Subtract interior shapes, if any
        for interior in interiors {
            let interior_3d = to_vec3d(interior, chip_z);
            let inner = self
                .modeler
                .draw_polyline(&interior_3d, true, &DrawOptions::default())?;
            self.modeler.subtract(&name, &[inner])?;
        }

        let chip_shapes = self.chip_subtract.entry(row.chip.clone()).or_default();
        if row.subtract {
            chip_shapes.insert(name.clone());
        }
        if !row.subtract && !row.helper {
            self.assign_perf_e.push(name);
        }
        Ok(())
    }

    /// Render a path-type element.
    fn render_element_path(&mut self, row: &Element, points: &[Point]) -> Result<()> {
        let options = DrawOptions::default();
        let name = shape_name(row.component, &row.name);
        let chip_z = self.design.chip_z(&row.chip)?;

        debug!("Drawing a path: {}", name);
        if points.len() < 2 {
            return Err(RenderError::Geometry(GeometryError::TooFewVertices {
                needed: 2,
                got: points.len(),
            }));
        }
        let points_3d = to_vec3d(points, chip_z);
        let drawn = self.modeler.draw_polyline(&points_3d, false, &options)?;
        self.modeler.rename(&drawn, &name)?;

        self.apply_fillet(row, points, false, &name)?;

        if row.width > 0.0 {
            // Sweep a perpendicular profile of the path width along the
            // path; the host positions the profile at the path start.
            let p0 = points[0];
            let p1 = points[1];
            let vlen = p0.distance_to(&p1);
            if vlen == 0.0 {
                return Err(RenderError::DegeneratePath { shape: name });
            }
            let half = row.width / (2.0 * vlen);
            let a = Point3::new(p0.x + half * (p0.y - p1.y), p0.y + half * (p1.x - p0.x), 0.0);
            let b = Point3::new(p0.x + half * (p1.y - p0.y), p0.y + half * (p0.x - p1.x), 0.0);
            let profile = self
                .modeler
                .draw_polyline(&[a, b], false, &DrawOptions::default())?;
            self.modeler.sweep_along_path(&profile, &name)?;
        }

        let chip_shapes = self.chip_subtract.entry(row.chip.clone()).or_default();
        if row.subtract {
            chip_shapes.insert(name.clone());
        }
        if row.width > 0.0 && !row.subtract && !row.helper {
            self.assign_perf_e.push(name);
        }
        Ok(())
    }

    /// Round eligible vertices of the drawn shape, if the row asks for it.
    fn apply_fillet(
        &mut self,
        row: &Element,
        points: &[Point],
        closed: bool,
        name: &str,
    ) -> Result<()> {
        let Some(radius) = row.fillet else {
            return Ok(());
        };
        let radius = round_to_precision(radius, FILLET_RADIUS_DIGITS);
        if !radius.is_finite() || radius <= 0.0 {
            return Ok(());
        }
        let indices = good_fillet_indices(points, radius, self.design.options.precision, closed);
        if !indices.is_empty() {
            self.modeler.fillet(radius, &indices, name)?;
        }
        Ok(())
    }

    /// Render the wafer and ground plane of every chip touched by the
    /// pass, and the vacuum box around the `main` chip.
    fn render_chips(&mut self) -> Result<()> {
        let design = self.design;
        let chip_names: Vec<String> = self.chip_subtract.keys().cloned().collect();
        for chip_name in chip_names {
            info!(chip = chip_name.as_str(), "Rendering chip");
            let spec = design.chip(&chip_name)?;
            let [ox, oy, oz] = spec
                .center_mm()
                .map_err(|source| dimension_error(&chip_name, "center", source))?;
            let [sx, sy, sz] = spec
                .size_mm()
                .map_err(|source| dimension_error(&chip_name, "size", source))?;
            let (holder_top, holder_bottom) = spec
                .sample_holder_mm()
                .map_err(|source| dimension_error(&chip_name, "sample_holder", source))?;

            if chip_name == "main" {
                // A single vacuum box, centered around the main chip
                self.modeler.draw_box_center(
                    Point3::new(ox, oy, (holder_top - holder_bottom) / 2.0),
                    [sx, sy, holder_top + holder_bottom],
                    "sample_holder",
                    &BoxStyle::default(),
                )?;
            }

            let plane = self.modeler.draw_rect_center(
                Point3::new(ox, oy, oz),
                sx,
                sy,
                &format!("{}_plane", chip_name),
                &DrawOptions::default(),
            )?;
            // Chips carrying subtract geometry keep a metallized ground plane
            if !self.chip_subtract[&chip_name].is_empty() {
                self.assign_perf_e.push(plane);
            }

            self.modeler.draw_box_center(
                Point3::new(ox, oy, sz / 2.0),
                [sx, sy, -sz],
                &chip_name,
                &BoxStyle {
                    material: Some(spec.material.clone()),
                    color: Some((186, 186, 205)),
                    transparency: 0.2,
                    wireframe: false,
                },
            )?;
        }
        Ok(())
    }

    /// Cut each chip's accumulated negative shapes out of its plane.
    fn subtract_from_ground(&mut self) -> Result<()> {
        let passes: Vec<(String, Vec<String>)> = self
            .chip_subtract
            .iter()
            .filter(|(_, shapes)| !shapes.is_empty())
            .map(|(chip, shapes)| (chip.clone(), shapes.iter().cloned().collect()))
            .collect();
        for (chip, shapes) in passes {
            debug!(chip = chip.as_str(), count = shapes.len(), "Subtracting from ground");
            self.modeler
                .subtract(&format!("{}_plane", chip), &shapes)?;
        }
        Ok(())
    }

    /// Assign the perfect-E boundary to everything queued as metallic.
    fn metallize(&mut self) -> Result<()> {
        let names = self.assign_perf_e.clone();
        info!(count = names.len(), "Metallizing shapes");
        self.modeler.assign_perfect_e(&names)
    }
}

/// Modeler shape name for a table row: `Q{component}_{element}`.
fn shape_name(component: ComponentId, element: &str) -> String {
    format!("Q{}{}{}", component, NAME_DELIM, clean_name(element))
}

/// Reduce a name to a valid modeler identifier: drop characters outside
/// `[0-9a-zA-Z_]`, then leading characters until a letter or underscore.
fn clean_name(name: &str) -> String {
    let filtered: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let start = filtered
        .find(|c: char| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(filtered.len());
    filtered[start..].to_string()
}

fn dimension_error(chip: &str, field: &str, source: planarkit_core::UnitsError) -> RenderError {
    RenderError::Design(DesignError::InvalidDimension {
        field: format!("{}.{}", chip, field),
        source,
    })
}
