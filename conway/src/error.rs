// error.rs - Error types for the engine and the start-configuration loader

use thiserror::Error;

/// Contract violations raised by [`crate::Grid`] accessors.
///
/// These are caller bugs, not runtime conditions; the stepper itself never
/// produces them because every coordinate it touches is in range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },
    /// A row coroutine panicked or was cancelled before finishing.
    #[cfg(feature = "coro")]
    #[error("row task failed: {0}")]
    RowTask(String),
}

/// Failures while reading a start configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read grid input: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing {0} count at start of grid input")]
    MissingDimension(&'static str),
    #[error("expected an integer {what} count, found {token:?}")]
    BadDimension { what: &'static str, token: String },
    #[error(transparent)]
    Grid(#[from] LifeError),
    #[error("grid input declares {expected} cells but only {found} were found")]
    Truncated { expected: usize, found: usize },
}
