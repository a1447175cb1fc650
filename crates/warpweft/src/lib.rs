//! # warpweft
//!
//! Tileable over/under weave patterns for map symbology.
//!
//! A weave pattern is described by one "primitive cell": a labeled
//! collection of polygons that exactly fills one period of the pattern,
//! so that repeating the cell across the plane renders woven-ribbon
//! symbology on top of a choropleth map. Two weave topologies are
//! supported:
//!
//! - [`TriangularWeave`]: three ribbon families at 0/±120 degrees on a
//!   rhombic lattice, clipped to a diamond-shaped unit cell.
//! - [`OrthogonalWeave`]: alternating horizontal and vertical ribbons
//!   on a rectangular unit cell, with an unclipped buffer ring so that
//!   tiled copies stitch together seamlessly.
//!
//! [`tessellate`] repeats a primitive cell across a target rectangle
//! and dissolves the fragments by ribbon label into one geometry per
//! label.
//!
//! All coordinates are abstract planar units; callers map them onto
//! whatever coordinate reference system their rendering layer uses.

pub mod cell;
pub mod error;
pub mod geometry;
pub mod tessellate;
pub mod weaves;

// Re-export common types at crate root for convenience.
pub use cell::{BOUNDING_LABEL, Fragment, FragmentKind, PrimitiveCell};
pub use error::WeaveError;
pub use tessellate::{Ribbon, tessellate};
pub use weaves::{OrthogonalWeave, TriangularWeave};
