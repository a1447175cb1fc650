//! Orthogonal rectangular weave.
//!
//! Horizontal and vertical ribbons alternate on a checkerboard: every
//! grid cell holds one exposed ribbon segment, horizontal where row
//! plus column is even, vertical where it is odd. Each segment spans
//! two periods of the crossing direction, which is what produces the
//! over/under illusion once the cells repeat.
//!
//! Unlike the triangular weave, fragments are not clipped to the tile
//! box. The grid is two rows and two columns larger than the cell so a
//! ring of complete segments overhangs the box; the tessellator relies
//! on that ring to dissolve seamless ribbons across tile boundaries.

use geo::{Polygon, Translate};

use crate::cell::{Fragment, PrimitiveCell};
use crate::error::WeaveError;
use crate::geometry::{polygon_from, rect_centered};

/// A validated orthogonal weave.
///
/// The primitive cell is computed eagerly at construction and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct OrthogonalWeave {
    h_width: f64,
    h_spacing: f64,
    v_width: f64,
    v_spacing: f64,
    margin: f64,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cell: PrimitiveCell,
}

impl OrthogonalWeave {
    /// Build an orthogonal weave.
    ///
    /// `h_width`/`h_spacing` describe the horizontal ribbons (height
    /// and row period), `v_width`/`v_spacing` the vertical ones. The
    /// label lists set the row and column class counts: the unit cell
    /// covers `row_labels.len()` horizontal periods by
    /// `col_labels.len()` vertical periods.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        h_width: f64,
        h_spacing: f64,
        v_width: f64,
        v_spacing: f64,
        margin: f64,
        row_labels: &[&str],
        col_labels: &[&str],
    ) -> Result<Self, WeaveError> {
        if h_width <= 0.0 {
            return Err(WeaveError::NonPositiveWidth(h_width));
        }
        if v_width <= 0.0 {
            return Err(WeaveError::NonPositiveWidth(v_width));
        }
        if h_spacing < h_width {
            return Err(WeaveError::SpacingTooSmall {
                spacing: h_spacing,
                width: h_width,
            });
        }
        if v_spacing < v_width {
            return Err(WeaveError::SpacingTooSmall {
                spacing: v_spacing,
                width: v_width,
            });
        }
        if margin < 0.0 {
            return Err(WeaveError::NegativeMargin(margin));
        }
        // Ribbon segments span two periods of the crossing direction.
        let h_length = 2.0 * v_spacing - v_width;
        let v_length = 2.0 * h_spacing - h_width;
        let limit = 0.5 * h_width.min(v_width).min(h_length).min(v_length);
        if margin >= limit {
            return Err(WeaveError::MarginTooLarge { margin, limit });
        }
        if row_labels.is_empty() || col_labels.is_empty() {
            return Err(WeaveError::EmptyLabels);
        }
        let row_labels: Vec<String> = row_labels.iter().map(|s| s.to_string()).collect();
        let col_labels: Vec<String> = col_labels.iter().map(|s| s.to_string()).collect();

        let h_base = rect_centered(h_length - 2.0 * margin, h_width - 2.0 * margin);
        let v_base = rect_centered(v_width - 2.0 * margin, v_length - 2.0 * margin);
        let tile_box = tile_box(
            col_labels.len() as f64 * 2.0 * v_spacing,
            row_labels.len() as f64 * 2.0 * h_spacing,
        );
        let fragments = weave_grid(
            &h_base,
            &v_base,
            h_spacing,
            v_spacing,
            &row_labels,
            &col_labels,
        );
        let cell = PrimitiveCell::new(tile_box, fragments);

        Ok(Self {
            h_width,
            h_spacing,
            v_width,
            v_spacing,
            margin,
            row_labels,
            col_labels,
            cell,
        })
    }

    pub fn h_width(&self) -> f64 {
        self.h_width
    }

    pub fn h_spacing(&self) -> f64 {
        self.h_spacing
    }

    pub fn v_width(&self) -> f64 {
        self.v_width
    }

    pub fn v_spacing(&self) -> f64 {
        self.v_spacing
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
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

/// Axis-aligned tile box from the origin.
fn tile_box(width: f64, height: f64) -> Polygon<f64> {
    polygon_from(&[(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)])
}

/// Lay segments on the buffered checkerboard. Rows and columns run two
/// past the unit cell on each axis so edge ribbons stay complete.
fn weave_grid(
    h_base: &Polygon<f64>,
    v_base: &Polygon<f64>,
    h_spacing: f64,
    v_spacing: f64,
    row_labels: &[String],
    col_labels: &[String],
) -> Vec<Fragment> {
    let m = row_labels.len();
    let n = col_labels.len();
    let rows = 2 * m + 2;
    let cols = 2 * n + 2;

    let mut fragments = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let (base, label) = if (r + c) % 2 == 0 {
                (h_base, &row_labels[r % m])
            } else {
                (v_base, &col_labels[c % n])
            };
            let moved = base.translate(c as f64 * v_spacing, r as f64 * h_spacing);
            fragments.push(Fragment::shape(label.clone(), moved));
        }
    }
    fragments
}
