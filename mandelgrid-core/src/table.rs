use serde::{Deserialize, Serialize};

/// Dense row-major grid of per-pixel iteration counts.
///
/// One entry per pixel, values in `[0, budget]`; a count equal to the budget
/// means the point did not escape within it. Backends build a fresh table per
/// recompute and the engine publishes it by replacing the previous one, so a
/// reader never observes a partially written grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvergenceTable {
    width: u32,
    height: u32,
    cells: Vec<u16>,
}

impl ConvergenceTable {
    /// A zero-filled table of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap an already-computed row-major grid.
    ///
    /// Panics if the cell count does not match the dimensions; dimensions and
    /// storage are a single invariant, not two.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u16>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cell count must equal width*height"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> usize {
        debug_assert!(col < self.width && row < self.height);
        row as usize * self.width as usize + col as usize
    }

    #[inline]
    pub fn get(&self, col: u32, row: u32) -> u16 {
        self.cells[self.index(col, row)]
    }

    #[inline]
    pub fn set(&mut self, col: u32, row: u32, count: u16) {
        let idx = self.index(col, row);
        self.cells[idx] = count;
    }

    /// One row of counts.
    pub fn row(&self, row: u32) -> &[u16] {
        let start = self.index(0, row);
        &self.cells[start..start + self.width as usize]
    }

    /// The whole grid, row-major — the view the rendering collaborator reads.
    pub fn as_slice(&self) -> &[u16] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled_with_matching_dimensions() {
        let table = ConvergenceTable::new(5, 3);
        assert_eq!(table.width(), 5);
        assert_eq!(table.height(), 3);
        assert_eq!(table.as_slice().len(), 15);
        assert!(table.as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn get_set_round_trip_is_row_major() {
        let mut table = ConvergenceTable::new(4, 2);
        table.set(3, 1, 255);
        assert_eq!(table.get(3, 1), 255);
        // Row-major: (col=3, row=1) lives at 1*4 + 3.
        assert_eq!(table.as_slice()[7], 255);
    }

    #[test]
    fn row_views_are_disjoint_slices() {
        let mut table = ConvergenceTable::new(3, 2);
        table.set(0, 1, 7);
        assert_eq!(table.row(0), &[0, 0, 0]);
        assert_eq!(table.row(1), &[7, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "cell count must equal width*height")]
    fn from_cells_rejects_mismatched_length() {
        ConvergenceTable::from_cells(4, 4, vec![0; 15]);
    }
}
