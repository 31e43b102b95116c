//! Script generation from recorded draw calls.
//!
//! Emits an IronPython automation script against a bound modeler handle,
//! one line per recorded op.

use crate::ops::ModelerOp;
use planarkit_core::Point3;

/// Script generator for converting an op log to an automation script.
pub struct ScriptWriter {
    design_name: String,
}

impl ScriptWriter {
    /// Creates a new script generator for the named design.
    pub fn new(design_name: impl Into<String>) -> Self {
        Self {
            design_name: design_name.into(),
        }
    }

    /// Generates the full script from an op log.
    pub fn generate(&self, ops: &[ModelerOp]) -> String {
        let mut script = String::new();
        script.push_str(&self.generate_header(ops.len()));
        script.push_str(&self.generate_body(ops));
        script.push_str(&self.generate_footer());
        script
    }

    /// Generates the script header.
    pub fn generate_header(&self, op_count: usize) -> String {
        let mut script = String::new();
        script.push_str(&format!(
            "# Modeler script generated by planarkit {}\n",
            env!("CARGO_PKG_VERSION")
        ));
        script.push_str(&format!("# Design: {}\n", self.design_name));
        script.push_str(&format!(
            "# Generated: {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        script.push_str(&format!("# Draw calls: {}\n", op_count));
        script.push('\n');
        script.push_str("# Requires a bound modeler handle, e.g.\n");
        script.push_str("#   modeler = epr.ProjectInfo().design.modeler\n");
        script.push('\n');
        script
    }

    /// Generates the script body, one call per op.
    pub fn generate_body(&self, ops: &[ModelerOp]) -> String {
        let mut script = String::new();
        for op in ops {
            script.push_str(&self.emit(op));
            script.push('\n');
        }
        script
    }

    /// Generates the script footer.
    pub fn generate_footer(&self) -> String {
        "\n# End of script\n".to_string()
    }

    fn emit(&self, op: &ModelerOp) -> String {
        match op {
            ModelerOp::DrawPolyline {
                name,
                points,
                closed,
                transparency,
            } => format!(
                "modeler.draw_polyline({}, closed={}, transparency={}, name={})",
                fmt_points(points),
                fmt_bool(*closed),
                fmt_num(*transparency),
                fmt_str(name),
            ),
            ModelerOp::DrawRectCorner {
                name,
                corner,
                x_size,
                y_size,
                transparency,
            } => format!(
                "modeler.draw_rect_corner({}, {}, {}, transparency={}, name={})",
                fmt_point(corner),
                fmt_num(*x_size),
                fmt_num(*y_size),
                fmt_num(*transparency),
                fmt_str(name),
            ),
            ModelerOp::DrawRectCenter {
                name,
                center,
                x_size,
                y_size,
                transparency,
            } => format!(
                "modeler.draw_rect_center({}, {}, {}, transparency={}, name={})",
                fmt_point(center),
                fmt_num(*x_size),
                fmt_num(*y_size),
                fmt_num(*transparency),
                fmt_str(name),
            ),
            ModelerOp::DrawBoxCenter {
                name,
                center,
                size,
                material,
                color,
                transparency,
                wireframe,
            } => {
                let mut call = format!(
                    "modeler.draw_box_center({}, ({}, {}, {}), name={}",
                    fmt_point(center),
                    fmt_num(size[0]),
                    fmt_num(size[1]),
                    fmt_num(size[2]),
                    fmt_str(name),
                );
                if let Some(material) = material {
                    call.push_str(&format!(", material={}", fmt_str(material)));
                }
                if let Some((r, g, b)) = color {
                    call.push_str(&format!(", color=({}, {}, {})", r, g, b));
                }
                call.push_str(&format!(
                    ", transparency={}, wireframe={})",
                    fmt_num(*transparency),
                    fmt_bool(*wireframe),
                ));
                call
            }
            ModelerOp::Rename { from, to } => {
                format!("modeler.rename_obj({}, {})", fmt_str(from), fmt_str(to))
            }
            ModelerOp::Fillet {
                target,
                radius,
                vertices,
            } => format!(
                "modeler.fillet({}, [{}], {})",
                fmt_num(*radius),
                vertices
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                fmt_str(target),
            ),
            ModelerOp::Subtract { target, tools } => format!(
                "modeler.subtract({}, [{}])",
                fmt_str(target),
                tools.iter().map(|t| fmt_str(t)).collect::<Vec<_>>().join(", "),
            ),
            ModelerOp::SweepAlongPath { profile, path } => format!(
                "modeler.sweep_along_path({}, {})",
                fmt_str(profile),
                fmt_str(path),
            ),
            ModelerOp::AssignPerfectE { names } => format!(
                "modeler.assign_perfect_E([{}])",
                names.iter().map(|n| fmt_str(n)).collect::<Vec<_>>().join(", "),
            ),
            ModelerOp::Message { level, text } => format!(
                "modeler.add_message({}, severity={})",
                fmt_str(text),
                level.severity(),
            ),
        }
    }
}

fn fmt_num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn fmt_point(p: &Point3) -> String {
    format!("({}, {}, {})", fmt_num(p.x), fmt_num(p.y), fmt_num(p.z))
}

fn fmt_points(points: &[Point3]) -> String {
    let inner: Vec<String> = points.iter().map(fmt_point).collect();
    format!("[{}]", inner.join(", "))
}

fn fmt_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn fmt_str(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planarkit_core::MessageLevel;

    #[test]
    fn test_header_and_footer() {
        let writer = ScriptWriter::new("transmon_demo");
        let header = writer.generate_header(3);
        assert!(header.contains("# Design: transmon_demo"));
        assert!(header.contains("# Draw calls: 3"));
        assert!(writer.generate_footer().contains("End of script"));
    }

    #[test]
    fn test_polyline_emission() {
        let writer = ScriptWriter::new("d");
        let op = ModelerOp::DrawPolyline {
            name: "polyline1".to_string(),
            points: vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.5, 0.0, 0.0)],
            closed: true,
            transparency: 0.0,
        };
        assert_eq!(
            writer.generate_body(&[op]),
            "modeler.draw_polyline([(0.0, 0.0, 0.0), (1.5, 0.0, 0.0)], closed=True, transparency=0.0, name=\"polyline1\")\n"
        );
    }

    #[test]
    fn test_box_emission_with_material() {
        let writer = ScriptWriter::new("d");
        let op = ModelerOp::DrawBoxCenter {
            name: "main".to_string(),
            center: Point3::new(0.0, 0.0, -0.375),
            size: [9.0, 6.0, 0.75],
            material: Some("silicon".to_string()),
            color: Some((186, 186, 205)),
            transparency: 0.2,
            wireframe: false,
        };
        let line = writer.generate_body(&[op]);
        assert!(line.contains("material=\"silicon\""));
        assert!(line.contains("color=(186, 186, 205)"));
        assert!(line.contains("wireframe=False"));
    }

    #[test]
    fn test_message_emission_uses_severity_code() {
        let writer = ScriptWriter::new("d");
        let op = ModelerOp::Message {
            level: MessageLevel::Warning,
            text: "loose \"wire\"".to_string(),
        };
        assert_eq!(
            writer.generate_body(&[op]),
            "modeler.add_message(\"loose \\\"wire\\\"\", severity=1)\n"
        );
    }

    #[test]
    fn test_full_script_shape() {
        let writer = ScriptWriter::new("d");
        let ops = vec![ModelerOp::AssignPerfectE {
            names: vec!["Q1_pad".to_string()],
        }];
        let script = writer.generate(&ops);
        assert!(script.starts_with("# Modeler script generated by planarkit"));
        assert!(script.contains("modeler.assign_perfect_E([\"Q1_pad\"])"));
        assert!(script.ends_with("# End of script\n"));
    }
}
