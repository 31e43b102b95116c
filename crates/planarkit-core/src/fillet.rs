//! Fillet-eligibility filter for polylines and polygons.
//!
//! Rounding a vertex consumes length along both adjacent edges, and a
//! neighboring vertex may be rounded at the same time. A vertex is
//! therefore only eligible when half of each adjacent edge, rounded to a
//! fixed number of decimal digits, is at least the fillet radius. All
//! comparisons round half away from zero to keep results independent of
//! floating-point order of operations.

use crate::geometry::Point;

/// Round a value to `digits` decimal digits, half away from zero.
pub fn round_to_precision(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Vertex indices that cannot be filleted at the given radius.
///
/// Closed rings (stored without the closing duplicate vertex) test every
/// vertex against its cyclic neighbors. Open polylines test interior
/// vertices only; the endpoints are handled by [`good_fillet_indices`].
/// A zero-length adjacent edge marks the vertex bad for any positive
/// radius.
///
/// * `points` - Ordered vertex list
/// * `radius` - Fillet radius in the same length unit as the vertices
/// * `precision` - Decimal digits used for all comparisons
/// * `closed` - True for a polygon ring, false for a polyline
pub fn bad_fillet_indices(points: &[Point], radius: f64, precision: i32, closed: bool) -> Vec<usize> {
    let n = points.len();
    let radius = round_to_precision(radius, precision);
    let mut bad = Vec::new();

    let too_close = |i: usize, j: usize| {
        round_to_precision(points[i].distance_to(&points[j]) / 2.0, precision) < radius
    };

    if closed {
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            if too_close(i, prev) || too_close(i, next) {
                bad.push(i);
            }
        }
    } else {
        for i in 1..n.saturating_sub(1) {
            if too_close(i, i - 1) || too_close(i, i + 1) {
                bad.push(i);
            }
        }
    }
    bad
}

/// Sorted complement of an index list against `0..len`.
pub fn toggle_indices(indices: &[usize], len: usize) -> Vec<usize> {
    let mut excluded = vec![false; len];
    for &i in indices {
        if i < len {
            excluded[i] = true;
        }
    }
    excluded
        .iter()
        .enumerate()
        .filter(|(_, &hit)| !hit)
        .map(|(i, _)| i)
        .collect()
}

/// Vertex indices that can be filleted at the given radius.
///
/// The complement of [`bad_fillet_indices`]; for open polylines the first
/// and last vertex are removed unconditionally, since each is missing an
/// edge on one side.
pub fn good_fillet_indices(
    points: &[Point],
    radius: f64,
    precision: i32,
    closed: bool,
) -> Vec<usize> {
    let bad = bad_fillet_indices(points, radius, precision, closed);
    let mut good = toggle_indices(&bad, points.len());
    if !closed {
        let last = points.len().saturating_sub(1);
        good.retain(|&i| i != 0 && i != last);
    }
    good
}
