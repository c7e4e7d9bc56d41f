//! The capability-polymorphic seam between the engine and its execution
//! strategies.

use crate::scalar::escape_count;
use crate::scheduler::RowScheduler;
use mandelgrid_core::{ConvergenceTable, Viewport};
use rayon::ThreadPoolBuildError;

/// One execution strategy for filling a convergence table.
///
/// Implementations build and return a fresh table rather than writing into a
/// live one; the engine publishes the result by swapping it in. Any two
/// backends must produce element-wise identical tables for the same viewport
/// and budget.
pub trait ConvergenceBackend {
    /// Strategy name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Compute the full table for the viewport. Blocking; the table is
    /// complete when this returns.
    fn compute(&mut self, viewport: &Viewport, budget: u16) -> ConvergenceTable;
}

/// Plain per-pixel evaluation on the calling thread. The simplest strategy
/// and the reference the others are validated against.
pub struct ScalarBackend;

impl ConvergenceBackend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn compute(&mut self, viewport: &Viewport, budget: u16) -> ConvergenceTable {
        let mapper = viewport.mapper();
        let mut table = ConvergenceTable::new(viewport.width(), viewport.height());

        for row in 0..viewport.height() {
            for col in 0..viewport.width() {
                table.set(col, row, escape_count(mapper.map(col, row), budget));
            }
        }
        table
    }
}

/// Four-lane vectorized rows distributed over the scheduler's worker pool.
pub struct VectorBackend {
    scheduler: RowScheduler,
}

impl VectorBackend {
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        Ok(Self {
            scheduler: RowScheduler::new(workers)?,
        })
    }
}

impl ConvergenceBackend for VectorBackend {
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn compute(&mut self, viewport: &Viewport, budget: u16) -> ConvergenceTable {
        self.scheduler.compute_all(viewport, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_vector_backends_agree() {
        let vp = Viewport::new(60, 45, (-2.0, 1.0), (-1.2, 1.2)).unwrap();

        let scalar = ScalarBackend.compute(&vp, 255);
        let vector = VectorBackend::new(4).unwrap().compute(&vp, 255);

        assert_eq!(scalar, vector);
    }

    #[test]
    fn backends_agree_after_zooming_in() {
        let mut vp = Viewport::new(40, 30, (-2.0, 1.0), (-1.2, 1.2)).unwrap();
        vp.focus(0.4).unwrap();
        vp.offset(-0.1, 0.05);

        let scalar = ScalarBackend.compute(&vp, 255);
        let vector = VectorBackend::new(2).unwrap().compute(&vp, 255);

        assert_eq!(scalar, vector);
    }

    #[test]
    fn tables_have_viewport_dimensions() {
        let vp = Viewport::new(33, 21, (-2.0, 1.0), (-1.2, 1.2)).unwrap();
        let table = ScalarBackend.compute(&vp, 255);

        assert_eq!(table.width(), 33);
        assert_eq!(table.height(), 21);
    }
}
