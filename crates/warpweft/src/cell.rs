//! Labeled shape records and the primitive cell.
//!
//! The primitive cell is the sole artifact a weave generator produces:
//! an ordered collection of labeled polygons, bounding record first,
//! consumed by rendering or export collaborators. Records are immutable
//! once produced - transforms always build new fragments, nothing is
//! mutated in place.

use geo::Polygon;

/// Label carried by the bounding record of every primitive cell.
pub const BOUNDING_LABEL: &str = "bb";

/// Coarse category of a primitive-cell record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// The tile box defining one period of the pattern.
    Bounding,
    /// A ribbon fragment.
    Shape,
}

/// One labeled polygon record.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub label: String,
    pub kind: FragmentKind,
    pub polygon: Polygon<f64>,
}

impl Fragment {
    /// A ribbon fragment.
    pub fn shape(label: impl Into<String>, polygon: Polygon<f64>) -> Self {
        Self {
            label: label.into(),
            kind: FragmentKind::Shape,
            polygon,
        }
    }

    fn bounding(polygon: Polygon<f64>) -> Self {
        Self {
            label: BOUNDING_LABEL.to_string(),
            kind: FragmentKind::Bounding,
            polygon,
        }
    }
}

/// An ordered collection of labeled polygons whose periodic repetition
/// reconstructs the full weave pattern.
///
/// The first record is always the tile box (category `bounding`, label
/// `bb`); every following record is a ribbon fragment in generation
/// order. An empty fragment list is a valid, if degenerate, cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveCell {
    records: Vec<Fragment>,
}

impl PrimitiveCell {
    /// Assemble a cell from its tile box and ribbon fragments.
    pub fn new(tile_box: Polygon<f64>, fragments: Vec<Fragment>) -> Self {
        let mut records = Vec::with_capacity(fragments.len() + 1);
        records.push(Fragment::bounding(tile_box));
        records.extend(fragments);
        Self { records }
    }

    /// All records, bounding record first.
    pub fn records(&self) -> &[Fragment] {
        &self.records
    }

    /// The tile box polygon.
    pub fn tile_box(&self) -> &Polygon<f64> {
        &self.records[0].polygon
    }

    /// The ribbon fragments, in generation order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.records[1..]
    }

    /// Distinct ribbon labels in first-seen order. The bounding label
    /// is not included.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for fragment in self.fragments() {
            if !labels.contains(&fragment.label.as_str()) {
                labels.push(&fragment.label);
            }
        }
        labels
    }
}
