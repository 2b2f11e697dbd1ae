// coro.rs - Generation advance with one tokio task per row
//
// Every row task reads the same frozen snapshot of the current generation and
// yields after each cell, so rows interleave cooperatively. Nothing is written
// back until every row has finished.

use std::sync::Arc;

use tracing::trace;

use crate::error::LifeError;
use crate::grid::{Cell, Grid};
use crate::neighbors::{count_live_neighbors, WrapPolicy};
use crate::rules::next_state;

/// Row coroutine: computes one row of the next generation.
async fn process_row(current: Arc<Grid>, row_index: usize, wrap: WrapPolicy) -> (usize, Vec<Cell>) {
    let mut row_result = Vec::with_capacity(current.cols());
    for col in 0..current.cols() {
        let neighbors = count_live_neighbors(&current, row_index, col, wrap);
        row_result.push(next_state(current.cell(row_index, col), neighbors));

        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (row_index, row_result)
}

/// Replace `grid` with its next generation, computing rows as concurrent
/// tasks on the ambient tokio runtime.
///
/// Produces the same grid as [`crate::Stepper::tick`].
pub async fn tick_rows(grid: &mut Grid, wrap: WrapPolicy) -> Result<(), LifeError> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let snapshot = Arc::new(grid.clone());

    // Spawn every row before awaiting any, so they time-slice
    let handles: Vec<_> = (0..rows)
        .map(|row| tokio::spawn(process_row(Arc::clone(&snapshot), row, wrap)))
        .collect();

    let mut next = vec![Cell::Dead; rows * cols];
    for handle in handles {
        let (row_index, completed_row) = handle
            .await
            .map_err(|err| LifeError::RowTask(err.to_string()))?;
        next[row_index * cols..(row_index + 1) * cols].copy_from_slice(&completed_row);
    }

    grid.swap_cells(&mut next);
    trace!(rows, "Committed row tasks");
    Ok(())
}
