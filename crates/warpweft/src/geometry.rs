//! Geometry helpers shared by the weave generators.
//!
//! Everything here is a thin layer over the `geo` engine: polygon
//! construction from vertex lists, an inward inset with flat mitred
//! corners, a kind-tagged clip result, and a balanced union. The
//! helpers are deliberately dumb about weaving - they know convex
//! polygons, not ribbons.

use geo::{Area, BooleanOps, Coord, Intersects, LineString, MultiPolygon, Polygon};

/// Area below which an intersection result counts as degenerate.
///
/// Candidates that merely touch the unit cell along an edge or at a
/// vertex come back from the boolean engine as empty or as hair-thin
/// slivers; both are filtered with this threshold.
pub const AREA_EPSILON: f64 = 1e-9;

/// Build a polygon from an open vertex list. The ring is closed
/// implicitly.
pub fn polygon_from(points: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(LineString::from(points.to_vec()), vec![])
}

/// Axis-aligned rectangle centered on the origin.
pub fn rect_centered(width: f64, height: f64) -> Polygon<f64> {
    let hw = width / 2.0;
    let hh = height / 2.0;
    polygon_from(&[(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)])
}

/// Result of clipping a candidate polygon against a cell window,
/// tagged by geometry kind so callers match on what they keep instead
/// of sniffing types.
#[derive(Debug, Clone, PartialEq)]
pub enum Clipped {
    /// No intersection at all.
    Empty,
    /// Intersection exists but carries no area (point or line contact).
    Degenerate,
    /// A single area-bearing polygon.
    Polygon(Polygon<f64>),
    /// Several disjoint area-bearing parts.
    MultiPolygon(MultiPolygon<f64>),
}

/// Clip `subject` to `window`, reporting the kind of the result.
pub fn clip(subject: &Polygon<f64>, window: &Polygon<f64>) -> Clipped {
    if !subject.intersects(window) {
        return Clipped::Empty;
    }
    let mut parts: Vec<Polygon<f64>> = subject
        .intersection(window)
        .into_iter()
        .filter(|part| part.unsigned_area() > AREA_EPSILON)
        .collect();
    match parts.len() {
        0 => Clipped::Degenerate,
        1 => Clipped::Polygon(parts.remove(0)),
        _ => Clipped::MultiPolygon(MultiPolygon::new(parts)),
    }
}

/// Inset a convex polygon inward by `margin`, keeping flat corners.
///
/// Every edge line is shifted along its inward normal and consecutive
/// shifted lines are re-intersected, which is exact for convex rings.
/// Returns `None` when the inset collapses the polygon - the margin
/// reached the inradius and the offset ring inverted or vanished.
pub fn inset_convex(polygon: &Polygon<f64>, margin: f64) -> Option<Polygon<f64>> {
    if margin == 0.0 {
        return Some(polygon.clone());
    }
    if margin < 0.0 {
        return None;
    }

    let mut ring: Vec<Coord<f64>> = polygon.exterior().0.clone();
    // geo rings repeat the first coordinate; drop the closing vertex.
    ring.pop();
    if ring.len() < 3 {
        return None;
    }
    // Work on a counter-clockwise ring so the inward normal is the left
    // normal of every edge.
    if ring_signed_area(&ring) < 0.0 {
        ring.reverse();
    }

    let n = ring.len();
    // One (point-on-line, direction) pair per shifted edge.
    let mut shifted: Vec<(Coord<f64>, Coord<f64>)> = Vec::with_capacity(n);
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f64::EPSILON {
            return None;
        }
        let point = Coord {
            x: a.x - dy / len * margin,
            y: a.y + dx / len * margin,
        };
        shifted.push((point, Coord { x: dx, y: dy }));
    }

    let mut inset = Vec::with_capacity(n);
    for i in 0..n {
        let before = shifted[(i + n - 1) % n];
        let after = shifted[i];
        inset.push(line_intersection(before, after)?);
    }

    // Past the inradius the offset edges cross and reverse direction.
    // A flipped edge pair can still enclose positive area, so every
    // inset edge must keep its source edge's orientation.
    for i in 0..n {
        let a = inset[i];
        let b = inset[(i + 1) % n];
        let d = shifted[i].1;
        if (b.x - a.x) * d.x + (b.y - a.y) * d.y <= 0.0 {
            return None;
        }
    }
    if ring_signed_area(&inset) <= AREA_EPSILON {
        return None;
    }
    Some(Polygon::new(LineString::new(inset), vec![]))
}

/// Intersection of two infinite lines given as (point, direction).
fn line_intersection(
    (p1, d1): (Coord<f64>, Coord<f64>),
    (p2, d2): (Coord<f64>, Coord<f64>),
) -> Option<Coord<f64>> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() <= f64::EPSILON {
        return None;
    }
    let t = ((p2.x - p1.x) * d2.y - (p2.y - p1.y) * d2.x) / cross;
    Some(Coord {
        x: p1.x + t * d1.x,
        y: p1.y + t * d1.y,
    })
}

/// Signed area of an open ring (shoelace). Positive for
/// counter-clockwise winding.
fn ring_signed_area(ring: &[Coord<f64>]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].x * ring[j].y;
        area -= ring[j].x * ring[i].y;
    }
    area / 2.0
}

/// Union a set of polygons into one (possibly multi-part) geometry.
///
/// Merges over a balanced split so that dissolving a large tessellation
/// stays O(n log n) instead of accumulating every polygon against one
/// ever-growing geometry.
pub fn union_all(polygons: &[Polygon<f64>]) -> MultiPolygon<f64> {
    match polygons {
        [] => MultiPolygon::new(Vec::new()),
        [single] => MultiPolygon::new(vec![single.clone()]),
        _ => {
            let (left, right) = polygons.split_at(polygons.len() / 2);
            union_all(left).union(&union_all(right))
        }
    }
}
