//! The viewport-model facade driving recomputation.

use crate::backend::ConvergenceBackend;
use mandelgrid_core::{ConvergenceTable, DomainError, EngineConfig, Point, Viewport};
use std::time::Instant;

/// Canonical zoom factor for interactive zoom-in steps.
pub const DEFAULT_FOCUS: f64 = 0.85;

/// Owns the viewport, the selected execution strategy, and the current
/// convergence table.
///
/// Every mutating operation validates its inputs, applies the domain change,
/// then synchronously computes a complete new table and publishes it by
/// replacing the previous one before returning. A caller that holds a
/// reference to the table between mutations therefore never sees a partially
/// written grid. The engine itself provides no synchronization for
/// concurrent mutation and read; the driving application sequences those.
pub struct FractalEngine {
    viewport: Viewport,
    budget: u16,
    backend: Box<dyn ConvergenceBackend>,
    table: ConvergenceTable,
}

impl FractalEngine {
    /// Construct the engine and compute the initial table.
    pub fn new(
        config: &EngineConfig,
        backend: Box<dyn ConvergenceBackend>,
    ) -> Result<Self, DomainError> {
        let viewport = config.viewport()?;
        let mut engine = Self {
            table: ConvergenceTable::new(viewport.width(), viewport.height()),
            viewport,
            budget: config.max_iterations,
            backend,
        };
        engine.recompute();
        Ok(engine)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current table, row-major, dimensions `(height, width)`.
    pub fn table(&self) -> &ConvergenceTable {
        &self.table
    }

    /// The iteration budget shared by every backend of this engine.
    pub fn budget(&self) -> u16 {
        self.budget
    }

    /// Replace both axis bounds directly.
    pub fn update_bounds(
        &mut self,
        re_domain: (f64, f64),
        im_domain: (f64, f64),
    ) -> Result<(), DomainError> {
        self.viewport.set_bounds(re_domain, im_domain)?;
        self.recompute();
        Ok(())
    }

    /// Center a symmetric box `[center ± radius]` on each axis.
    pub fn update_around(
        &mut self,
        center: Point,
        x_radius: f64,
        y_radius: f64,
    ) -> Result<(), DomainError> {
        self.viewport.around(center, x_radius, y_radius)?;
        self.recompute();
        Ok(())
    }

    /// Zoom about the domain midpoint; factors below 1 zoom in.
    pub fn focus(&mut self, zoom: f64) -> Result<(), DomainError> {
        self.viewport.focus(zoom)?;
        self.recompute();
        Ok(())
    }

    /// Box-select zoom from two pixel corners.
    pub fn focus_box(&mut self, a: (u32, u32), b: (u32, u32)) -> Result<(), DomainError> {
        self.viewport.focus_box(a, b)?;
        self.recompute();
        Ok(())
    }

    /// Pan by fractions of the current domain size.
    pub fn set_offset(&mut self, dx: f64, dy: f64) {
        self.viewport.offset(dx, dy);
        self.recompute();
    }

    fn recompute(&mut self) {
        let start = Instant::now();
        let table = self.backend.compute(&self.viewport, self.budget);
        debug_assert_eq!(
            (table.width(), table.height()),
            (self.viewport.width(), self.viewport.height())
        );
        self.table = table;
        log::debug!(
            "recomputed {}x{} table via {} backend in {:?}",
            self.viewport.width(),
            self.viewport.height(),
            self.backend.name(),
            start.elapsed()
        );
    }
}
