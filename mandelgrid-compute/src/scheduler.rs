//! Row-band scheduling over a reusable worker pool.

use crate::vector::compute_row;
use mandelgrid_core::{ConvergenceTable, PlaneMapper, Viewport};
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Partitions the table into contiguous row bands and computes them on a
/// pool of worker threads.
///
/// The pool is built once and reused across recomputes. Each band is a
/// disjoint `&mut` sub-slice of the output grid, so workers never share a
/// cell and no locking is involved. `compute_all` blocks on the pool's scope
/// barrier: when it returns, every row has been written.
pub struct RowScheduler {
    pool: ThreadPool,
    workers: usize,
}

impl RowScheduler {
    /// Build a scheduler with `workers` pool threads (at least one).
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("mandelgrid-row-{i}"))
            .build()?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Compute every row of a fresh table for the viewport.
    ///
    /// `height` splits into `workers` bands of `height / workers` rows, one
    /// pool task per band; rows left over by the division are computed on
    /// the calling thread after the join.
    pub fn compute_all(&self, viewport: &Viewport, budget: u16) -> ConvergenceTable {
        let width = viewport.width();
        let height = viewport.height();
        let mapper = viewport.mapper();

        let mut table = ConvergenceTable::new(width, height);
        let band_rows = height as usize / self.workers;

        if band_rows == 0 {
            // Fewer rows than workers; not worth fanning out.
            compute_rows(&mapper, 0, width, budget, table.as_mut_slice());
            return table;
        }

        let band_len = band_rows * width as usize;
        let pooled_rows = band_rows * self.workers;
        let (pooled, leftover) = table
            .as_mut_slice()
            .split_at_mut(pooled_rows * width as usize);

        self.pool.scope(|scope| {
            for (band_index, band) in pooled.chunks_mut(band_len).enumerate() {
                let mapper = &mapper;
                let first_row = (band_index * band_rows) as u32;
                scope.spawn(move |_| {
                    compute_rows(mapper, first_row, width, budget, band);
                });
            }
        });

        if !leftover.is_empty() {
            compute_rows(&mapper, pooled_rows as u32, width, budget, leftover);
        }

        table
    }
}

/// Run the vectorized-then-scalar-remainder row routine over a contiguous
/// band of rows starting at `first_row`. `band` must hold a whole number of
/// rows of `width` cells.
pub fn compute_rows(
    mapper: &PlaneMapper,
    first_row: u32,
    width: u32,
    budget: u16,
    band: &mut [u16],
) {
    debug_assert_eq!(band.len() % width as usize, 0);
    for (i, row_cells) in band.chunks_exact_mut(width as usize).enumerate() {
        compute_row(mapper, first_row + i as u32, budget, row_cells);
    }
}
