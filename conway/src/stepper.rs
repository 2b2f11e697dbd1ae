// stepper.rs - Generation advance with a reusable next-state buffer

use crate::grid::{Cell, Grid};
use crate::neighbors::{count_live_neighbors, WrapPolicy};
use crate::rules::next_state;

/// Advances grids one generation at a time.
///
/// Next states are computed into a private buffer from the untouched current
/// generation, then the buffer and the grid storage are swapped. The buffer is
/// kept between ticks, so a long run allocates once.
#[derive(Debug, Default, Clone)]
pub struct Stepper {
    next: Vec<Cell>,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `grid` with its next generation.
    pub fn tick(&mut self, grid: &mut Grid, wrap: WrapPolicy) {
        let (rows, cols) = (grid.rows(), grid.cols());
        self.next.clear();
        self.next.reserve(rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                let neighbors = count_live_neighbors(grid, row, col, wrap);
                self.next.push(next_state(grid.cell(row, col), neighbors));
            }
        }

        grid.swap_cells(&mut self.next);
    }
}

/// One tick with a throwaway buffer.
pub fn tick(grid: &mut Grid, wrap: WrapPolicy) {
    Stepper::new().tick(grid, wrap);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = Grid::new(4, 4).unwrap();
        tick(&mut grid, WrapPolicy::Wrapped);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn zero_sized_grid_is_a_no_op() {
        let mut grid = Grid::new(0, 0).unwrap();
        tick(&mut grid, WrapPolicy::Wrapped);
        assert_eq!(grid.rows(), 0);
    }

    #[test]
    fn buffer_is_reused_across_ticks() {
        let mut stepper = Stepper::new();
        let mut grid = Grid::from_rows(&["-----", "-----", "-XXX-", "-----", "-----"]).unwrap();
        let original = grid.clone();

        stepper.tick(&mut grid, WrapPolicy::Bounded);
        assert_ne!(grid, original);
        stepper.tick(&mut grid, WrapPolicy::Bounded);
        assert_eq!(grid, original);
        assert!(stepper.next.capacity() >= 25);
    }

    #[test]
    fn block_survives_on_a_torus() {
        let mut grid = Grid::from_rows(&["XX--", "XX--", "----", "----"]).unwrap();
        let original = grid.clone();
        tick(&mut grid, WrapPolicy::Wrapped);
        assert_eq!(grid, original);
    }
}
