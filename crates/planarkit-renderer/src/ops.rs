//! Recorded draw calls.
//!
//! [`RecordingModeler`] stands in for the live CAD session: it assigns
//! default shape names the way the host does, keeps the set of live
//! shapes, and fails on the name collisions and missing references the
//! host would reject. The op log is the input to script emission.

use crate::error::{RenderError, Result};
use crate::modeler::{BoxStyle, DrawOptions, Modeler};
use planarkit_core::{Message, MessageLevel, Point3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ModelerOp {
    DrawPolyline {
        name: String,
        points: Vec<Point3>,
        closed: bool,
        transparency: f64,
    },
    DrawRectCorner {
        name: String,
        corner: Point3,
        x_size: f64,
        y_size: f64,
        transparency: f64,
    },
    DrawRectCenter {
        name: String,
        center: Point3,
        x_size: f64,
        y_size: f64,
        transparency: f64,
    },
    DrawBoxCenter {
        name: String,
        center: Point3,
        size: [f64; 3],
        material: Option<String>,
        color: Option<(u8, u8, u8)>,
        transparency: f64,
        wireframe: bool,
    },
    Rename {
        from: String,
        to: String,
    },
    Fillet {
        target: String,
        radius: f64,
        vertices: Vec<usize>,
    },
    Subtract {
        target: String,
        tools: Vec<String>,
    },
    SweepAlongPath {
        profile: String,
        path: String,
    },
    AssignPerfectE {
        names: Vec<String>,
    },
    Message {
        level: MessageLevel,
        text: String,
    },
}

/// In-memory modeler recording every draw call.
#[derive(Debug, Default)]
pub struct RecordingModeler {
    ops: Vec<ModelerOp>,
    shapes: BTreeSet<String>,
    polyline_count: u32,
    rect_count: u32,
    box_count: u32,
    messages: Vec<Message>,
}

impl RecordingModeler {
    /// Create an empty recording modeler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded draw calls, in call order.
    pub fn ops(&self) -> &[ModelerOp] {
        &self.ops
    }

    /// Consume the modeler, returning the op log.
    pub fn into_ops(self) -> Vec<ModelerOp> {
        self.ops
    }

    /// Names of shapes currently alive in the modeler.
    pub fn shape_names(&self) -> &BTreeSet<String> {
        &self.shapes
    }

    /// Messages forwarded to the message manager.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn register(&mut self, name: String) -> Result<String> {
        if !self.shapes.insert(name.clone()) {
            return Err(RenderError::DuplicateShapeName { name });
        }
        Ok(name)
    }

    fn require(&self, name: &str) -> Result<()> {
        if self.shapes.contains(name) {
            Ok(())
        } else {
            Err(RenderError::UnknownShape {
                name: name.to_string(),
            })
        }
    }
}

impl Modeler for RecordingModeler {
    fn draw_polyline(
        &mut self,
        points: &[Point3],
        closed: bool,
        options: &DrawOptions,
    ) -> Result<String> {
        self.polyline_count += 1;
        let name = self.register(format!("polyline{}", self.polyline_count))?;
        self.ops.push(ModelerOp::DrawPolyline {
            name: name.clone(),
            points: points.to_vec(),
            closed,
            transparency: options.transparency,
        });
        Ok(name)
    }

    fn draw_rect_corner(
        &mut self,
        corner: Point3,
        x_size: f64,
        y_size: f64,
        options: &DrawOptions,
    ) -> Result<String> {
        self.rect_count += 1;
        let name = self.register(format!("rect{}", self.rect_count))?;
        self.ops.push(ModelerOp::DrawRectCorner {
            name: name.clone(),
            corner,
            x_size,
            y_size,
            transparency: options.transparency,
        });
        Ok(name)
    }

    fn draw_rect_center(
        &mut self,
        center: Point3,
        x_size: f64,
        y_size: f64,
        name: &str,
        options: &DrawOptions,
    ) -> Result<String> {
        let name = self.register(name.to_string())?;
        self.ops.push(ModelerOp::DrawRectCenter {
            name: name.clone(),
            center,
            x_size,
            y_size,
            transparency: options.transparency,
        });
        Ok(name)
    }

    fn draw_box_center(
        &mut self,
        center: Point3,
        size: [f64; 3],
        name: &str,
        style: &BoxStyle,
    ) -> Result<String> {
        let name = self.register(name.to_string())?;
        self.ops.push(ModelerOp::DrawBoxCenter {
            name: name.clone(),
            center,
            size,
            material: style.material.clone(),
            color: style.color,
            transparency: style.transparency,
            wireframe: style.wireframe,
        });
        Ok(name)
    }

    fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        self.require(old)?;
        if self.shapes.contains(new) {
            return Err(RenderError::DuplicateShapeName {
                name: new.to_string(),
            });
        }
        self.shapes.remove(old);
        self.shapes.insert(new.to_string());
        self.ops.push(ModelerOp::Rename {
            from: old.to_string(),
            to: new.to_string(),
        });
        Ok(())
    }

    fn fillet(&mut self, radius: f64, vertices: &[usize], target: &str) -> Result<()> {
        self.require(target)?;
        self.ops.push(ModelerOp::Fillet {
            target: target.to_string(),
            radius,
            vertices: vertices.to_vec(),
        });
        Ok(())
    }

    fn subtract(&mut self, target: &str, tools: &[String]) -> Result<()> {
        self.require(target)?;
        for tool in tools {
            self.require(tool)?;
        }
        // The host consumes tool bodies
        for tool in tools {
            self.shapes.remove(tool);
        }
        self.ops.push(ModelerOp::Subtract {
            target: target.to_string(),
            tools: tools.to_vec(),
        });
        Ok(())
    }

    fn sweep_along_path(&mut self, profile: &str, path: &str) -> Result<()> {
        self.require(profile)?;
        self.require(path)?;
        // The swept solid takes over the path's name; the profile is consumed
        self.shapes.remove(profile);
        self.ops.push(ModelerOp::SweepAlongPath {
            profile: profile.to_string(),
            path: path.to_string(),
        });
        Ok(())
    }

    fn assign_perfect_e(&mut self, names: &[String]) -> Result<()> {
        for name in names {
            self.require(name)?;
        }
        self.ops.push(ModelerOp::AssignPerfectE {
            names: names.to_vec(),
        });
        Ok(())
    }

    fn add_message(&mut self, level: MessageLevel, text: &str) {
        self.messages.push(Message::new(level, text));
        self.ops.push(ModelerOp::Message {
            level,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square3(z: f64) -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ]
    }

    #[test]
    fn test_auto_names_count_per_kind() {
        let mut modeler = RecordingModeler::new();
        let options = DrawOptions::default();
        let a = modeler.draw_polyline(&square3(0.0), true, &options).unwrap();
        let b = modeler.draw_polyline(&square3(0.0), false, &options).unwrap();
        let r = modeler
            .draw_rect_corner(Point3::new(0.0, 0.0, 0.0), 1.0, 1.0, &options)
            .unwrap();
        assert_eq!(a, "polyline1");
        assert_eq!(b, "polyline2");
        assert_eq!(r, "rect1");
    }

    #[test]
    fn test_rename_moves_name() {
        let mut modeler = RecordingModeler::new();
        let options = DrawOptions::default();
        let auto = modeler.draw_polyline(&square3(0.0), true, &options).unwrap();
        modeler.rename(&auto, "Q1_pad").unwrap();
        assert!(modeler.shape_names().contains("Q1_pad"));
        assert!(!modeler.shape_names().contains("polyline1"));

        assert_eq!(
            modeler.rename("polyline1", "other"),
            Err(RenderError::UnknownShape {
                name: "polyline1".to_string()
            })
        );
    }

    #[test]
    fn test_rename_collision_fails() {
        let mut modeler = RecordingModeler::new();
        let options = DrawOptions::default();
        let first = modeler.draw_polyline(&square3(0.0), true, &options).unwrap();
        modeler.rename(&first, "Q1_pad").unwrap();
        let second = modeler.draw_polyline(&square3(0.0), true, &options).unwrap();
        assert_eq!(
            modeler.rename(&second, "Q1_pad"),
            Err(RenderError::DuplicateShapeName {
                name: "Q1_pad".to_string()
            })
        );
    }

    #[test]
    fn test_subtract_consumes_tools() {
        let mut modeler = RecordingModeler::new();
        let options = DrawOptions::default();
        let outer = modeler.draw_polyline(&square3(0.0), true, &options).unwrap();
        let inner = modeler.draw_polyline(&square3(0.0), true, &options).unwrap();
        modeler.subtract(&outer, &[inner.clone()]).unwrap();
        assert!(modeler.shape_names().contains(&outer));
        assert!(!modeler.shape_names().contains(&inner));

        assert_eq!(
            modeler.subtract(&outer, &[inner.clone()]),
            Err(RenderError::UnknownShape { name: inner })
        );
    }

    #[test]
    fn test_sweep_consumes_profile() {
        let mut modeler = RecordingModeler::new();
        let options = DrawOptions::default();
        let path = modeler.draw_polyline(&square3(0.0), false, &options).unwrap();
        let profile = modeler
            .draw_polyline(
                &[Point3::new(0.0, -0.1, 0.0), Point3::new(0.0, 0.1, 0.0)],
                false,
                &options,
            )
            .unwrap();
        modeler.sweep_along_path(&profile, &path).unwrap();
        assert!(!modeler.shape_names().contains(&profile));
        assert!(modeler.shape_names().contains(&path));
    }

    #[test]
    fn test_assign_perfect_e_requires_live_shapes() {
        let mut modeler = RecordingModeler::new();
        assert_eq!(
            modeler.assign_perfect_e(&["ghost".to_string()]),
            Err(RenderError::UnknownShape {
                name: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_op_log_round_trips_through_json() {
        let mut modeler = RecordingModeler::new();
        let options = DrawOptions::default();
        let name = modeler.draw_polyline(&square3(-0.75), true, &options).unwrap();
        modeler.rename(&name, "Q1_pad").unwrap();

        let json = serde_json::to_string(modeler.ops()).unwrap();
        let decoded: Vec<ModelerOp> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, modeler.ops());
    }

    #[test]
    fn test_messages_recorded() {
        let mut modeler = RecordingModeler::new();
        modeler.add_message(MessageLevel::Warning, "no ground plane on chip aux");
        assert_eq!(modeler.messages().len(), 1);
        assert_eq!(modeler.messages()[0].level, MessageLevel::Warning);
    }
}
