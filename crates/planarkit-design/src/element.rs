//! Element tables: the per-row geometry records of a design.

use planarkit_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the component an element belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ComponentId(pub u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Element table kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Poly,
    Path,
    Junction,
}

impl ElementKind {
    /// All table kinds in rendering order.
    pub const ALL: [ElementKind; 3] = [Self::Poly, Self::Path, Self::Junction];
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poly => write!(f, "poly"),
            Self::Path => write!(f, "path"),
            Self::Junction => write!(f, "junction"),
        }
    }
}

/// Planar geometry of one element.
///
/// Polygon rings are stored without the closing duplicate vertex; the
/// closing edge is implicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Polygon {
        exterior: Vec<Point>,
        #[serde(default)]
        interiors: Vec<Vec<Point>>,
    },
    LineString {
        points: Vec<Point>,
    },
}

impl Geometry {
    /// True for closed (polygon) geometry.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Polygon { .. })
    }

    /// The primary vertex list: exterior ring or the line itself.
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Polygon { exterior, .. } => exterior,
            Self::LineString { points } => points,
        }
    }
}

/// Lumped-element parameters carried by junction rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionParams {
    /// Josephson inductance in nanohenries.
    pub inductance_nh: f64,
    /// Junction capacitance in femtofarads.
    pub capacitance_ff: f64,
    /// Junction resistance in ohms.
    pub resistance_ohms: f64,
    /// Maximum mesh length over the junction, as a unit string.
    pub max_mesh_length: String,
}

/// One row of an element table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Owning component.
    pub component: ComponentId,
    /// Element name within the component, unique per component.
    pub name: String,
    /// Chip the element sits on.
    #[serde(default = "default_chip")]
    pub chip: String,
    /// Planar geometry.
    pub geometry: Geometry,
    /// Fillet radius in millimeters, if corners are to be rounded.
    #[serde(default)]
    pub fillet: Option<f64>,
    /// Path width in millimeters; zero for unswept construction lines.
    #[serde(default)]
    pub width: f64,
    /// Subtract this shape from its chip's ground plane.
    #[serde(default)]
    pub subtract: bool,
    /// Construction-only helper, never metallized.
    #[serde(default)]
    pub helper: bool,
    /// Junction extension columns; populated for junction rows only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub junction: Option<JunctionParams>,
}

fn default_chip() -> String {
    "main".to_string()
}

/// Per-kind element tables of a design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementTables {
    #[serde(default)]
    pub poly: Vec<Element>,
    #[serde(default)]
    pub path: Vec<Element>,
    #[serde(default)]
    pub junction: Vec<Element>,
}

impl ElementTables {
    /// Rows of one table.
    pub fn rows(&self, kind: ElementKind) -> &[Element] {
        match kind {
            ElementKind::Poly => &self.poly,
            ElementKind::Path => &self.path,
            ElementKind::Junction => &self.junction,
        }
    }

    /// Append a row to one table.
    pub fn push(&mut self, kind: ElementKind, element: Element) {
        match kind {
            ElementKind::Poly => self.poly.push(element),
            ElementKind::Path => self.path.push(element),
            ElementKind::Junction => self.junction.push(element),
        }
    }

    /// Total row count across all tables.
    pub fn len(&self) -> usize {
        self.poly.len() + self.path.len() + self.junction.len()
    }

    /// True when every table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_points() {
        let poly = Geometry::Polygon {
            exterior: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            interiors: vec![],
        };
        assert!(poly.is_closed());
        assert_eq!(poly.points().len(), 3);

        let line = Geometry::LineString {
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
        };
        assert!(!line.is_closed());
    }

    #[test]
    fn test_tables_push_and_rows() {
        let mut tables = ElementTables::default();
        let element = Element {
            component: ComponentId(1),
            name: "pad".to_string(),
            chip: "main".to_string(),
            geometry: Geometry::LineString { points: vec![] },
            fillet: None,
            width: 0.0,
            subtract: false,
            helper: false,
            junction: None,
        };
        tables.push(ElementKind::Path, element);
        assert_eq!(tables.rows(ElementKind::Path).len(), 1);
        assert!(tables.rows(ElementKind::Poly).is_empty());
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn test_element_serde_defaults() {
        let json = r#"{
            "component": 3,
            "name": "cl",
            "geometry": {"type": "line_string", "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.0}]}
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.chip, "main");
        assert_eq!(element.fillet, None);
        assert_eq!(element.width, 0.0);
        assert!(!element.subtract);
        assert!(!element.helper);
    }
}
