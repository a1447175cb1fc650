//! Primitive-cell tessellation.
//!
//! Repeats a primitive cell across a target rectangle and dissolves
//! every fragment sharing a label into one geometry, so each ribbon
//! comes out as a single (possibly multi-part) shape instead of a heap
//! of per-tile pieces.

use geo::{BoundingRect, MultiPolygon, Polygon, Rect, Translate};

use crate::cell::PrimitiveCell;
use crate::error::WeaveError;
use crate::geometry::union_all;

/// One merged ribbon of a tessellation.
#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon {
    pub label: String,
    pub geometry: MultiPolygon<f64>,
}

/// Tile `cell` across `target`, dissolving fragments by label.
///
/// Whole-tile repetitions cover the target (at least one per axis) and
/// the tiled block is centered on it, so the result always overhangs
/// the target rather than undershooting it. Ribbons come back in
/// first-seen label order.
pub fn tessellate(cell: &PrimitiveCell, target: Rect<f64>) -> Result<Vec<Ribbon>, WeaveError> {
    if target.width() <= 0.0 || target.height() <= 0.0 {
        return Err(WeaveError::EmptyTarget);
    }
    let tile = match cell.tile_box().bounding_rect() {
        Some(tile) if tile.width() > 0.0 && tile.height() > 0.0 => tile,
        _ => return Err(WeaveError::EmptyTileBox),
    };

    let cols = (target.width() / tile.width()).ceil().max(1.0) as usize;
    let rows = (target.height() / tile.height()).ceil().max(1.0) as usize;

    // Center the whole block of repetitions on the target rectangle.
    let block_width = cols as f64 * tile.width();
    let block_height = rows as f64 * tile.height();
    let dx0 = target.center().x - block_width / 2.0 - tile.min().x;
    let dy0 = target.center().y - block_height / 2.0 - tile.min().y;

    // Accumulate translated fragments per label, first-seen order.
    let mut groups: Vec<(String, Vec<Polygon<f64>>)> = Vec::new();
    for col in 0..cols {
        for row in 0..rows {
            let dx = dx0 + col as f64 * tile.width();
            let dy = dy0 + row as f64 * tile.height();
            for fragment in cell.fragments() {
                let moved = fragment.polygon.translate(dx, dy);
                match groups.iter().position(|(label, _)| *label == fragment.label) {
                    Some(i) => groups[i].1.push(moved),
                    None => groups.push((fragment.label.clone(), vec![moved])),
                }
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|(label, polygons)| Ribbon {
            label,
            geometry: union_all(&polygons),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weaves::{OrthogonalWeave, TriangularWeave};
    use approx::assert_relative_eq;
    use geo::{Area, coord};

    fn orthogonal_cell() -> PrimitiveCell {
        OrthogonalWeave::new(1.0, 1.5, 1.0, 1.5, 0.05, &["h1"], &["v1"])
            .expect("valid parameters")
            .into_primitive_cell()
    }

    #[test]
    fn rejects_zero_area_target() {
        let cell = orthogonal_cell();
        let flat = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 5.0, y: 0.0 });
        assert_eq!(tessellate(&cell, flat), Err(WeaveError::EmptyTarget));
    }

    #[test]
    fn single_tile_target_reproduces_the_cell() {
        // Tessellating over exactly the tile box is the identity:
        // one repetition, no offset, one merged record per label with
        // the same total area as the cell's own fragments.
        let cell = orthogonal_cell();
        let target = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 3.0, y: 3.0 });
        let ribbons = tessellate(&cell, target).expect("valid target");

        assert_eq!(ribbons.len(), 2);
        assert_eq!(ribbons[0].label, "h1");
        assert_eq!(ribbons[1].label, "v1");

        for ribbon in &ribbons {
            let expected: f64 = cell
                .fragments()
                .iter()
                .filter(|f| f.label == ribbon.label)
                .map(|f| f.polygon.unsigned_area())
                .sum();
            assert_relative_eq!(ribbon.geometry.unsigned_area(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn small_target_still_gets_one_full_tile() {
        let cell = orthogonal_cell();
        let target = Rect::new(coord! { x: 1.0, y: 1.0 }, coord! { x: 1.5, y: 1.5 });
        let ribbons = tessellate(&cell, target).expect("valid target");
        assert_eq!(ribbons.len(), 2);
        // One repetition of each label, centered on the half-unit
        // target: same areas as a full cell.
        let total: f64 = ribbons.iter().map(|r| r.geometry.unsigned_area()).sum();
        let cell_total: f64 = cell
            .fragments()
            .iter()
            .map(|f| f.polygon.unsigned_area())
            .sum();
        assert_relative_eq!(total, cell_total, epsilon = 1e-9);
    }

    #[test]
    fn large_target_is_covered_per_label() {
        let cell = orthogonal_cell();
        let target = Rect::new(coord! { x: -50.0, y: -50.0 }, coord! { x: 50.0, y: 50.0 });
        let ribbons = tessellate(&cell, target).expect("valid target");

        assert_eq!(ribbons.len(), 2, "one merged record per distinct label");
        for ribbon in &ribbons {
            let bounds = ribbon.geometry.bounding_rect().expect("non-empty ribbon");
            assert!(
                bounds.min().x <= -50.0
                    && bounds.min().y <= -50.0
                    && bounds.max().x >= 50.0
                    && bounds.max().y >= 50.0,
                "ribbon {} should span the whole target, got {bounds:?}",
                ribbon.label
            );
        }
    }

    #[test]
    fn duplicate_buffer_segments_dissolve() {
        // Adjacent tiles place identical buffer segments on top of one
        // another; after the union the merged area is strictly smaller
        // than the raw per-tile sum.
        let cell = orthogonal_cell();
        let target = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 6.0, y: 3.0 });
        let ribbons = tessellate(&cell, target).expect("valid target");
        let merged: f64 = ribbons.iter().map(|r| r.geometry.unsigned_area()).sum();
        let raw: f64 = cell
            .fragments()
            .iter()
            .map(|f| f.polygon.unsigned_area())
            .sum::<f64>()
            * 2.0;
        assert!(
            merged < raw,
            "overlapping buffer segments should dissolve ({merged} vs {raw})"
        );
    }

    #[test]
    fn triangular_cell_round_trips() {
        let weave = TriangularWeave::new(1.0, 2.0, 0.0, &["a", "b", "c"]).unwrap();
        let cell = weave.primitive_cell();
        let target = cell.tile_box().bounding_rect().unwrap();
        let ribbons = tessellate(cell, target).expect("valid target");

        assert_eq!(ribbons.len(), 3);
        let labels: Vec<&str> = ribbons.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        let total: f64 = ribbons.iter().map(|r| r.geometry.unsigned_area()).sum();
        assert_relative_eq!(total, 3.0 * 3.0_f64.sqrt() / 2.0, epsilon = 1e-9);
    }
}
