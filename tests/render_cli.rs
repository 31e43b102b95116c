//! End-to-end test: design file in, modeler script out.

use planarkit_core::Point;
use planarkit_design::{save_design, Design, Element, ElementKind, Geometry};
use std::process::Command;

fn sample_design() -> Design {
    let mut design = Design::new("cli_demo");
    let id = design.add_component("transmon").unwrap();
    design
        .add_element(
            ElementKind::Poly,
            Element {
                component: id,
                name: "pad".to_string(),
                chip: "main".to_string(),
                geometry: Geometry::Polygon {
                    exterior: vec![
                        Point::new(-0.5, -0.25),
                        Point::new(0.5, -0.25),
                        Point::new(0.5, 0.25),
                        Point::new(-0.5, 0.25),
                    ],
                    interiors: vec![],
                },
                fillet: None,
                width: 0.0,
                subtract: false,
                helper: false,
                junction: None,
            },
        )
        .unwrap();
    design
}

#[test]
fn test_render_design_file_to_script() {
    let dir = tempfile::tempdir().unwrap();
    let design_path = dir.path().join("demo.pkd");
    let script_path = dir.path().join("demo.py");

    save_design(&sample_design(), &design_path).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_planarkit"))
        .arg(&design_path)
        .arg(&script_path)
        .status()
        .unwrap();
    assert!(status.success());

    let script = std::fs::read_to_string(&script_path).unwrap();
    assert!(script.contains("# Design: cli_demo"));
    assert!(script.contains("modeler.draw_rect_corner"));
    assert!(script.contains("modeler.rename_obj(\"rect1\", \"Q1_pad\")"));
    assert!(script.contains("modeler.assign_perfect_E([\"Q1_pad\"])"));
}

#[test]
fn test_missing_arguments_fail() {
    let status = Command::new(env!("CARGO_BIN_EXE_planarkit"))
        .status()
        .unwrap();
    assert!(!status.success());
}
