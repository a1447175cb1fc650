//! Triangular (hexagonal-axis) diamond weave.
//!
//! Three ribbon families run at 0 and ±120 degrees and cross over and
//! under each other. One diamond-shaped primitive cell repeats on a
//! rhombic lattice to cover the plane; each fragment in the cell is an
//! exposed ribbon segment clipped to the cell boundary.

use geo::{Point, Polygon, Rotate, Translate};

use crate::cell::{Fragment, PrimitiveCell};
use crate::error::WeaveError;
use crate::geometry::{Clipped, clip, inset_convex, polygon_from};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A validated triangular weave.
///
/// The primitive cell is computed eagerly at construction and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct TriangularWeave {
    width: f64,
    spacing: f64,
    margin: f64,
    labels: [String; 3],
    cell: PrimitiveCell,
}

impl TriangularWeave {
    /// Build a triangular weave from ribbon width, center-to-center
    /// spacing, an inward margin and one label per ribbon family.
    ///
    /// The exposed segment length is `spacing - width`; the margin must
    /// stay below half the smaller of exposed length and width, or the
    /// inset would collapse the ribbon.
    pub fn new(
        width: f64,
        spacing: f64,
        margin: f64,
        labels: &[&str],
    ) -> Result<Self, WeaveError> {
        if width <= 0.0 {
            return Err(WeaveError::NonPositiveWidth(width));
        }
        if spacing < width {
            return Err(WeaveError::SpacingTooSmall { spacing, width });
        }
        if margin < 0.0 {
            return Err(WeaveError::NegativeMargin(margin));
        }
        let exposed = spacing - width;
        let limit = 0.5 * exposed.min(width);
        if margin >= limit {
            return Err(WeaveError::MarginTooLarge { margin, limit });
        }
        if labels.len() != 3 {
            return Err(WeaveError::LabelCount {
                expected: 3,
                got: labels.len(),
            });
        }
        let labels = [
            labels[0].to_string(),
            labels[1].to_string(),
            labels[2].to_string(),
        ];

        let tile_box = tile_box(spacing);
        let base = base_ribbon(width, exposed, margin)?;
        let candidates = replicate(&base, spacing, &labels);
        let fragments = clip_to_box(candidates, &tile_box);
        let cell = PrimitiveCell::new(tile_box, fragments);

        Ok(Self {
            width,
            spacing,
            margin,
            labels,
            cell,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// One label per ribbon family, in 0/-120/+120 degree order.
    pub fn labels(&self) -> &[String; 3] {
        &self.labels
    }

    pub fn tile_box(&self) -> &Polygon<f64> {
        self.cell.tile_box()
    }

    pub fn primitive_cell(&self) -> &PrimitiveCell {
        &self.cell
    }

    pub fn into_primitive_cell(self) -> PrimitiveCell {
        self.cell
    }
}

/// The four periodicity vectors of the rhombic lattice.
fn lattice_vectors(spacing: f64) -> [(f64, f64); 4] {
    let rise = spacing * SQRT_3 / 2.0;
    [
        (0.0, 0.0),
        (spacing / 2.0, -rise),
        (spacing, 0.0),
        (spacing / 2.0, rise),
    ]
}

/// Diamond tile box through the four lattice vectors.
fn tile_box(spacing: f64) -> Polygon<f64> {
    polygon_from(&lattice_vectors(spacing))
}

/// One exposed ribbon segment: a parallelogram of length `exposed`
/// leaning at 120 degrees, inset by `margin` to open the over/under
/// gap at crossings.
fn base_ribbon(width: f64, exposed: f64, margin: f64) -> Result<Polygon<f64>, WeaveError> {
    let rise = width * SQRT_3 / 2.0;
    let shape = polygon_from(&[
        (0.0, 0.0),
        (exposed, 0.0),
        (exposed - width / 2.0, rise),
        (-width / 2.0, rise),
    ]);
    inset_convex(&shape, margin).ok_or(WeaveError::MarginTooLarge {
        margin,
        limit: 0.5 * exposed.min(width),
    })
}

/// All twelve ribbon copies that could intersect one cell: each lattice
/// vector carries the base segment at 0, -120 and +120 degrees about
/// the origin, one label per rotation family.
fn replicate(base: &Polygon<f64>, spacing: f64, labels: &[String; 3]) -> Vec<Fragment> {
    let origin = Point::new(0.0, 0.0);
    let families = [
        base.clone(),
        base.rotate_around_point(-120.0, origin),
        base.rotate_around_point(120.0, origin),
    ];

    let mut candidates = Vec::with_capacity(12);
    for (family, label) in families.iter().zip(labels.iter()) {
        for (dx, dy) in lattice_vectors(spacing) {
            candidates.push(Fragment::shape(label.clone(), family.translate(dx, dy)));
        }
    }
    candidates
}

/// Clip every candidate to the tile box, keeping only area-bearing
/// results. Point and line contacts are expected and silently dropped.
fn clip_to_box(candidates: Vec<Fragment>, tile_box: &Polygon<f64>) -> Vec<Fragment> {
    let mut kept = Vec::new();
    for candidate in candidates {
        match clip(&candidate.polygon, tile_box) {
            Clipped::Empty | Clipped::Degenerate => {}
            Clipped::Polygon(polygon) => kept.push(Fragment::shape(candidate.label, polygon)),
            Clipped::MultiPolygon(parts) => kept.extend(
                parts
                    .into_iter()
                    .map(|part| Fragment::shape(candidate.label.clone(), part)),
            ),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{Area, BooleanOps, BoundingRect};

    fn scenario() -> TriangularWeave {
        TriangularWeave::new(1.0, 2.0, 0.0, &["a", "b", "c"]).expect("valid parameters")
    }

    #[test]
    fn rejects_non_positive_width() {
        let err = TriangularWeave::new(0.0, 2.0, 0.0, &["a", "b", "c"]).unwrap_err();
        assert_eq!(err, WeaveError::NonPositiveWidth(0.0));
    }

    #[test]
    fn rejects_spacing_below_width() {
        let err = TriangularWeave::new(2.0, 1.0, 0.0, &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, WeaveError::SpacingTooSmall { .. }));
    }

    #[test]
    fn rejects_negative_margin() {
        let err = TriangularWeave::new(1.0, 2.0, -0.1, &["a", "b", "c"]).unwrap_err();
        assert_eq!(err, WeaveError::NegativeMargin(-0.1));
    }

    #[test]
    fn rejects_margin_at_half_the_ribbon() {
        let err = TriangularWeave::new(1.0, 2.0, 0.5, &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, WeaveError::MarginTooLarge { .. }));
    }

    #[test]
    fn rejects_margin_past_the_inradius() {
        // 0.45 passes the half-extent check but still collapses the
        // 120-degree parallelogram, whose inradius is sqrt(3)/4.
        let err = TriangularWeave::new(1.0, 2.0, 0.45, &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, WeaveError::MarginTooLarge { .. }));
    }

    #[test]
    fn rejects_wrong_label_count() {
        let err = TriangularWeave::new(1.0, 2.0, 0.0, &["a", "b"]).unwrap_err();
        assert_eq!(err, WeaveError::LabelCount { expected: 3, got: 2 });
    }

    #[test]
    fn tile_box_is_the_expected_rhombus() {
        let weave = scenario();
        let bounds = weave.tile_box().bounding_rect().unwrap();
        assert_relative_eq!(bounds.min().x, 0.0);
        assert_relative_eq!(bounds.min().y, -SQRT_3, epsilon = 1e-12);
        assert_relative_eq!(bounds.max().x, 2.0);
        assert_relative_eq!(bounds.max().y, SQRT_3, epsilon = 1e-12);
        assert_relative_eq!(
            weave.tile_box().unsigned_area(),
            2.0 * SQRT_3,
            epsilon = 1e-12
        );
    }

    #[test]
    fn scenario_keeps_five_fragments() {
        // Of the 12 candidates, several only touch the rhombus along an
        // edge or at a vertex and are filtered; 5 area-bearing pieces
        // survive, 6 records with the bounding box.
        let weave = scenario();
        assert_eq!(weave.primitive_cell().fragments().len(), 5);
        assert_eq!(weave.primitive_cell().records().len(), 6);
        for fragment in weave.primitive_cell().fragments() {
            assert!(["a", "b", "c"].contains(&fragment.label.as_str()));
        }
    }

    #[test]
    fn fragments_lie_inside_the_tile_box() {
        let weave = scenario();
        for fragment in weave.primitive_cell().fragments() {
            let own = fragment.polygon.unsigned_area();
            let inside = fragment
                .polygon
                .intersection(weave.tile_box())
                .unsigned_area();
            assert_relative_eq!(inside, own, epsilon = 1e-9);
        }
    }

    #[test]
    fn fragments_do_not_overlap() {
        let weave = scenario();
        let fragments = weave.primitive_cell().fragments();
        for (i, a) in fragments.iter().enumerate() {
            for b in &fragments[i + 1..] {
                let overlap = a.polygon.intersection(&b.polygon).unsigned_area();
                assert!(
                    overlap < 1e-9,
                    "fragments {i} and a later one overlap by {overlap}"
                );
            }
        }
    }

    #[test]
    fn exposed_area_is_three_segments_per_cell() {
        // Each family exposes exactly one segment's worth of area per
        // cell; the remaining quarter of the rhombus is the open
        // kagome holes between ribbons.
        let weave = scenario();
        let total: f64 = weave
            .primitive_cell()
            .fragments()
            .iter()
            .map(|f| f.polygon.unsigned_area())
            .sum();
        assert_relative_eq!(total, 3.0 * SQRT_3 / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn margin_shrinks_every_fragment() {
        let tight = scenario();
        let open = TriangularWeave::new(1.0, 2.0, 0.1, &["a", "b", "c"]).unwrap();
        let tight_area: f64 = tight
            .primitive_cell()
            .fragments()
            .iter()
            .map(|f| f.polygon.unsigned_area())
            .sum();
        let open_area: f64 = open
            .primitive_cell()
            .fragments()
            .iter()
            .map(|f| f.polygon.unsigned_area())
            .sum();
        assert!(
            open_area < tight_area,
            "margin should strictly shrink exposed area ({open_area} vs {tight_area})"
        );
    }

    #[test]
    fn family_labels_follow_rotation_order() {
        // The unrotated family starts at the origin corner of the cell,
        // so at least one "a" fragment touches (0, 0).
        let weave = scenario();
        let a_fragments: Vec<_> = weave
            .primitive_cell()
            .fragments()
            .iter()
            .filter(|f| f.label == "a")
            .collect();
        assert!(!a_fragments.is_empty());
        assert_eq!(weave.labels(), &["a", "b", "c"]);
    }
}
