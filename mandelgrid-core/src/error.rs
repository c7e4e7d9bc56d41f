//! Boundary validation errors for viewport operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("pixel dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("degenerate {axis} domain [{min}, {max}]: size must be non-zero and finite")]
    DegenerateDomain {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("zoom factor must be positive and finite, got {0}")]
    InvalidZoom(f64),

    #[error("box selection collapses to a line or point")]
    DegenerateSelection,
}
