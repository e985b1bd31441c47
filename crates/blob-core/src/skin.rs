//! Quadratic skinning of a point ring.
//!
//! Each source point becomes the control point of one quadratic segment whose
//! endpoints are the midpoints ("mid-anchors") between neighbours. The curve
//! therefore passes through every mid-anchor and is tangent-continuous there.

use glam::DVec2;

use crate::error::{BlobError, Result};
use crate::surface::Surface;

/// Midpoints of consecutive points, wrapping: `mid[j] = (p[j] + p[j+1]) / 2`
/// and the last entry averages the last and first points.
pub fn mid_anchors(points: &[DVec2]) -> Vec<DVec2> {
    let n = points.len();
    (0..n)
        .map(|j| (points[j] + points[(j + 1) % n]) * 0.5)
        .collect()
}

/// Emit a smooth path through `points` onto the surface's current path.
///
/// Closed paths wrap back to the first mid-anchor; open paths start and end
/// exactly on the first and last points. Nothing is stroked or filled.
pub fn skin<S: Surface + ?Sized>(surface: &mut S, points: &[DVec2], closed: bool) -> Result<()> {
    let n = points.len();
    if n < 3 {
        return Err(BlobError::InvalidGeometry { points: n });
    }
    let mid = mid_anchors(points);

    if closed {
        surface.move_to(mid[0]);
        for j in 1..n {
            surface.quadratic_curve_to(points[j], mid[j]);
        }
        surface.quadratic_curve_to(points[0], mid[0]);
    } else {
        surface.move_to(points[0]);
        surface.line_to(mid[0]);
        for j in 1..n - 1 {
            surface.quadratic_curve_to(points[j], mid[j]);
        }
        surface.line_to(points[n - 1]);
    }
    Ok(())
}
