// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use crate::error::LifeError;

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Symbol used for live cells in the text format.
    pub const ALIVE_SYMBOL: char = 'X';
    /// Symbol written for dead cells; any non-`X` symbol reads back as dead.
    pub const DEAD_SYMBOL: char = '-';

    pub fn from_symbol(symbol: char) -> Self {
        if symbol == Self::ALIVE_SYMBOL { Cell::Alive } else { Cell::Dead }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Alive => Self::ALIVE_SYMBOL,
            Cell::Dead  => Self::DEAD_SYMBOL,
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead  => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size, row-major board of cells.
///
/// Dimensions are set once at construction; the stepper replaces the contents
/// wholesale every tick but never resizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimensions {
                rows: rows as i64,
                cols: cols as i64,
            })?;

        Ok(Self { rows, cols, cells: vec![Cell::Dead; len] })
    }

    /// Build a grid from text rows, `X` alive and anything else dead.
    ///
    /// The widest row sets the column count; shorter rows are padded with
    /// dead cells.
    pub fn from_rows(lines: &[&str]) -> Result<Self, LifeError> {
        let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(lines.len(), cols)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                grid.cells[row * cols + col] = Cell::from_symbol(symbol);
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when `(row, col)` names a cell of this grid. Takes signed
    /// coordinates so neighbor offsets can be tested before wrapping.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, LifeError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), LifeError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a cell between alive and dead, returning its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggled();
        Ok(self.cells[idx])
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx / cols, idx % cols), cell))
    }

    /// One slice per row, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Unchecked read for coordinates the caller already proved in range.
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Exchange the backing storage with a same-sized next-generation buffer.
    pub(crate) fn swap_cells(&mut self, next: &mut Vec<Cell>) {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(LifeError::OutOfBounds { row, col, rows: self.rows, cols: self.cols })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
