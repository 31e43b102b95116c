//! The modeler call surface.
//!
//! One method per draw call of the CAD automation API. Draw methods
//! return the name the modeler assigned to the new shape; explicit-name
//! methods echo the requested name back.

use crate::error::Result;
use planarkit_core::{MessageLevel, Point3};
use serde::{Deserialize, Serialize};

/// Options applied to 2-D draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    /// Shape transparency, 0.0 (opaque) to 1.0.
    pub transparency: f64,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { transparency: 0.0 }
    }
}

/// Appearance and material of a drawn box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Material assignment, when any.
    pub material: Option<String>,
    /// RGB display color.
    pub color: Option<(u8, u8, u8)>,
    /// Box transparency, 0.0 (opaque) to 1.0.
    pub transparency: f64,
    /// Render as wireframe only.
    pub wireframe: bool,
}

/// Draw-call boundary of the external CAD modeler.
pub trait Modeler {
    /// Draw a polyline through the given 3-D points, closed or open.
    fn draw_polyline(&mut self, points: &[Point3], closed: bool, options: &DrawOptions)
        -> Result<String>;

    /// Draw a rectangle from its minimum corner and side lengths.
    fn draw_rect_corner(
        &mut self,
        corner: Point3,
        x_size: f64,
        y_size: f64,
        options: &DrawOptions,
    ) -> Result<String>;

    /// Draw a rectangle centered on a point, with an explicit name.
    fn draw_rect_center(
        &mut self,
        center: Point3,
        x_size: f64,
        y_size: f64,
        name: &str,
        options: &DrawOptions,
    ) -> Result<String>;

    /// Draw a box centered on a point, with an explicit name.
    fn draw_box_center(
        &mut self,
        center: Point3,
        size: [f64; 3],
        name: &str,
        style: &BoxStyle,
    ) -> Result<String>;

    /// Rename an existing shape.
    fn rename(&mut self, old: &str, new: &str) -> Result<()>;

    /// Round the given vertices of a polyline shape at the given radius.
    fn fillet(&mut self, radius: f64, vertices: &[usize], target: &str) -> Result<()>;

    /// Boolean-subtract the tool shapes from the target, consuming them.
    fn subtract(&mut self, target: &str, tools: &[String]) -> Result<()>;

    /// Sweep a profile shape along a path shape, consuming the profile.
    fn sweep_along_path(&mut self, profile: &str, path: &str) -> Result<()>;

    /// Assign the perfect electric conductor boundary to the named shapes.
    fn assign_perfect_e(&mut self, names: &[String]) -> Result<()>;

    /// Forward a message to the host's message manager.
    fn add_message(&mut self, level: MessageLevel, text: &str);
}
