// patterns.rs - Built-in starting patterns and random worlds

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::grid::{Cell, Grid};

/// Probability of a cell starting alive in a random world.
pub const DEFAULT_DENSITY: f64 = 1.0 / 3.0;

/// A named pattern, as live-cell offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Look a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Clear `grid` and stamp `pattern` in its center.
///
/// Cells that fall outside a grid smaller than the pattern are dropped.
/// Returns how many cells were placed.
pub fn apply(grid: &mut Grid, pattern: &Pattern) -> usize {
    grid.clear();

    let top = grid.rows().saturating_sub(pattern.height()) / 2;
    let left = grid.cols().saturating_sub(pattern.width()) / 2;

    let mut placed = 0;
    for &(row, col) in pattern.cells {
        if grid.set(top + row, left + col, Cell::Alive).is_ok() {
            placed += 1;
        }
    }
    debug!(pattern = pattern.name, placed, "Applied pattern");
    placed
}

/// Fill `grid` with seeded random life; each cell is alive with probability
/// `density` (clamped to `0.0..=1.0`; NaN or infinite falls back to
/// [`DEFAULT_DENSITY`]).
pub fn randomize(grid: &mut Grid, seed: u64, density: f64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { DEFAULT_DENSITY };
    for cell in grid.cells_mut() {
        *cell = Cell::from(rng.gen_bool(density));
    }
    debug!(seed, live = grid.live_count(), "Randomized grid");
}
