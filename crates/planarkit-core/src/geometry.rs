//! 2-D and 3-D geometry primitives for planar designs.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A point in 3-D modeler space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Creates a new point with the given coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned bounding box: (min_x, min_y, max_x, max_y).
pub type Bounds = (f64, f64, f64, f64);

/// Lift a 2-D vertex list to 3-D at the given elevation.
pub fn to_vec3d(points: &[Point], z: f64) -> Vec<Point3> {
    points.iter().map(|p| Point3::new(p.x, p.y, z)).collect()
}

/// Bounding box of a vertex list, or `None` when empty.
pub fn bounds(points: &[Point]) -> Option<Bounds> {
    let first = points.first()?;
    let mut b = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        b.0 = b.0.min(p.x);
        b.1 = b.1.min(p.y);
        b.2 = b.2.max(p.x);
        b.3 = b.3.max(p.y);
    }
    Some(b)
}

const RECT_TOLERANCE: f64 = 1e-9;

/// Returns true when the ring is an axis-aligned rectangle.
///
/// The ring must have exactly four vertices and each corner of its own
/// bounding box must be hit by exactly one of them. Only such rings can
/// be drawn from their bounds alone.
pub fn is_rectangle(ring: &[Point]) -> bool {
    if ring.len() != 4 {
        return false;
    }
    let (min_x, min_y, max_x, max_y) = match bounds(ring) {
        Some(b) => b,
        None => return false,
    };
    if max_x - min_x <= RECT_TOLERANCE || max_y - min_y <= RECT_TOLERANCE {
        return false;
    }
    let corners = [
        Point::new(min_x, min_y),
        Point::new(max_x, min_y),
        Point::new(max_x, max_y),
        Point::new(min_x, max_y),
    ];
    corners.iter().all(|corner| {
        ring.iter()
            .filter(|p| p.distance_to(corner) <= RECT_TOLERANCE)
            .count()
            == 1
    })
}
