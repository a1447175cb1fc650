//! Parameter-validation errors.
//!
//! All validation happens when a weave or a tessellation is requested.
//! Once parameters are accepted the geometric pipeline is total: no
//! downstream operation is expected to fail for valid inputs, so none
//! of them is individually guarded.

use thiserror::Error;

/// Everything that can be wrong with a parameter set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeaveError {
    #[error("ribbon width must be positive, got {0}")]
    NonPositiveWidth(f64),

    #[error("spacing {spacing} is smaller than ribbon width {width}")]
    SpacingTooSmall { spacing: f64, width: f64 },

    #[error("margin must be non-negative, got {0}")]
    NegativeMargin(f64),

    /// The margin would collapse a ribbon to empty or inverted geometry.
    #[error("margin {margin} collapses the ribbon; it must stay below {limit}")]
    MarginTooLarge { margin: f64, limit: f64 },

    /// Triangular weaves pair each rotation family with one label.
    #[error("expected {expected} ribbon labels, got {got}")]
    LabelCount { expected: usize, got: usize },

    #[error("ribbon label lists must not be empty")]
    EmptyLabels,

    #[error("tessellation target rectangle must have positive area")]
    EmptyTarget,

    #[error("primitive cell has an empty tile box")]
    EmptyTileBox,
}
