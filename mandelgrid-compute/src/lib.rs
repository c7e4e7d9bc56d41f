pub mod backend;
pub mod colorize;
pub mod engine;
pub mod scalar;
pub mod scheduler;
pub mod vector;

pub use backend::{ConvergenceBackend, ScalarBackend, VectorBackend};
pub use colorize::{grayscale, smooth_palette, Colorizer, Rgb};
pub use engine::{FractalEngine, DEFAULT_FOCUS};
pub use scalar::escape_count;
pub use scheduler::{compute_rows, RowScheduler};
pub use vector::{compute_row, escape_count_x4, LANES};

// Re-export core types for convenience
pub use mandelgrid_core::*;
