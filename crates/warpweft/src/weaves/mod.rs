//! Weave generators.
//!
//! Each generator validates its parameters up front, builds the base
//! ribbon shape analytically, replicates it with the symmetries of one
//! period and assembles a [`PrimitiveCell`](crate::cell::PrimitiveCell).
//! Construction is eager: the cell is computed once and read-only
//! afterwards; a new parameter set means a new generator.

mod orthogonal;
mod triangular;

pub use orthogonal::OrthogonalWeave;
pub use triangular::TriangularWeave;
