// neighbors.rs - Live-neighbor counting under bounded or toroidal edges

use crate::grid::Grid;

/// Edge-adjacency policy, chosen once per run by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Off-grid positions do not exist and are excluded from counts.
    #[default]
    Bounded,
    /// Opposite edges and corners are adjacent (torus).
    Wrapped,
}

impl WrapPolicy {
    pub fn is_wrapped(self) -> bool {
        self == WrapPolicy::Wrapped
    }
}

impl From<bool> for WrapPolicy {
    fn from(wrap: bool) -> Self {
        if wrap { WrapPolicy::Wrapped } else { WrapPolicy::Bounded }
    }
}

/// The 8 Moore-neighborhood offsets, row-major, center excluded.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Count the live cells among the 8 neighbors of `(row, col)`.
///
/// `(row, col)` must lie inside `grid`. With [`WrapPolicy::Wrapped`] every
/// offset maps onto some cell, so on grids narrower than 3 the same cell can
/// be counted more than once.
#[inline]
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize, wrap: WrapPolicy) -> u8 {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    let (r, c) = (row as isize, col as isize);

    let mut count = 0u8;
    for (dr, dc) in OFFSETS {
        let (nr, nc) = (r + dr, c + dc);
        let alive = match wrap {
            WrapPolicy::Wrapped => {
                grid.cell(nr.rem_euclid(rows) as usize, nc.rem_euclid(cols) as usize).is_alive()
            }
            WrapPolicy::Bounded => {
                grid.in_bounds(nr, nc) && grid.cell(nr as usize, nc as usize).is_alive()
            }
        };
        if alive { count += 1; }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_cell_has_no_neighbors() {
        let grid = Grid::from_rows(&["---", "-X-", "---"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 1, WrapPolicy::Bounded), 0);
        assert_eq!(count_live_neighbors(&grid, 1, 1, WrapPolicy::Wrapped), 0);
    }

    #[test]
    fn full_ring_counts_eight() {
        let grid = Grid::from_rows(&["XXX", "X-X", "XXX"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 1, WrapPolicy::Bounded), 8);
    }

    #[test]
    fn bounded_corner_sees_three_at_most() {
        let grid = Grid::from_rows(&["XXXX", "XXXX", "XXXX", "XXXX"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0, WrapPolicy::Bounded), 3);
        assert_eq!(count_live_neighbors(&grid, 3, 3, WrapPolicy::Bounded), 3);
        assert_eq!(count_live_neighbors(&grid, 0, 1, WrapPolicy::Bounded), 5);
        assert_eq!(count_live_neighbors(&grid, 0, 0, WrapPolicy::Wrapped), 8);
    }

    #[test]
    fn wrapped_corner_reaches_opposite_corner() {
        let grid = Grid::from_rows(&["----", "----", "----", "---X"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0, WrapPolicy::Wrapped), 1);
        assert_eq!(count_live_neighbors(&grid, 0, 0, WrapPolicy::Bounded), 0);
    }

    #[test]
    fn wrapped_edges_connect() {
        let grid = Grid::from_rows(&["X---", "----", "----", "----"]).unwrap();
        // Right edge, bottom edge and the far corner all touch (0, 0).
        assert_eq!(count_live_neighbors(&grid, 0, 3, WrapPolicy::Wrapped), 1);
        assert_eq!(count_live_neighbors(&grid, 3, 0, WrapPolicy::Wrapped), 1);
        assert_eq!(count_live_neighbors(&grid, 3, 3, WrapPolicy::Wrapped), 1);
        assert_eq!(count_live_neighbors(&grid, 2, 2, WrapPolicy::Wrapped), 0);
    }

    #[test]
    fn single_cell_torus_counts_itself_eight_times() {
        let grid = Grid::from_rows(&["X"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0, WrapPolicy::Wrapped), 8);
        assert_eq!(count_live_neighbors(&grid, 0, 0, WrapPolicy::Bounded), 0);
    }

    #[test]
    fn wrap_policy_from_flag() {
        assert_eq!(WrapPolicy::from(true), WrapPolicy::Wrapped);
        assert_eq!(WrapPolicy::from(false), WrapPolicy::Bounded);
        assert!(WrapPolicy::Wrapped.is_wrapped());
    }
}
