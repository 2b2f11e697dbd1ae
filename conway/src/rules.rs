// rules.rs - The fixed Life rule table

use crate::grid::Cell;

/// Next state of a cell given its current state and live-neighbor count.
///
/// Two neighbors keep the cell as it is, so a dead cell with two neighbors
/// stays dead; only three neighbors bring a cell to life.
#[inline]
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match live_neighbors {
        2 => current,      // Stable
        3 => Cell::Alive,  // Birth or survival
        _ => Cell::Dead,   // Loneliness or overcrowding
    }
}
