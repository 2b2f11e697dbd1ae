// loader.rs - Reads start configurations in the plain-text grid format
//
// Format: two integers (rows, columns), then rows*columns cell symbols read
// one non-whitespace character at a time. `X` is alive, anything else dead.
// Whatever follows the last cell is ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LifeError, LoadError};
use crate::grid::{Cell, Grid};

/// Read a grid from any byte stream.
pub fn load<R: Read>(mut reader: R) -> Result<Grid, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

/// Open and read a grid file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let grid = load(BufReader::new(File::open(path)?))?;
    info!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        live = grid.live_count(),
        "Loaded start configuration",
    );
    Ok(grid)
}

/// Parse a grid from already-read text.
pub fn parse(text: &str) -> Result<Grid, LoadError> {
    let mut tokens = text.split_whitespace();
    let rows = dimension(tokens.next(), "row")?;
    let cols = dimension(tokens.next(), "column")?;

    let invalid = LifeError::InvalidDimensions { rows, cols };
    let (rows, cols) = match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(rows), Ok(cols)) => (rows, cols),
        _ => return Err(invalid.into()),
    };
    let expected = rows.checked_mul(cols).ok_or(invalid)?;

    // Gather symbols before allocating so a lying header cannot force a huge grid.
    let symbols: Vec<char> = tokens.flat_map(str::chars).take(expected).collect();
    if symbols.len() < expected {
        return Err(LoadError::Truncated { expected, found: symbols.len() });
    }

    let mut grid = Grid::new(rows, cols)?;
    for (idx, symbol) in symbols.into_iter().enumerate() {
        grid.set(idx / cols, idx % cols, Cell::from_symbol(symbol))?;
    }
    debug!(rows, cols, "Parsed grid text");
    Ok(grid)
}

fn dimension(token: Option<&str>, what: &'static str) -> Result<i64, LoadError> {
    let token = token.ok_or(LoadError::MissingDimension(what))?;
    token.parse().map_err(|_| LoadError::BadDimension { what, token: token.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_per_row_layout() {
        let grid = parse("3 4\n-X--\n--X-\nXXX-\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
        assert_eq!(grid.to_string(), "-X--\n--X-\nXXX-\n");
    }

    #[test]
    fn whitespace_between_symbols_is_skipped() {
        let grid = parse("2\n2\nX -\n- X").unwrap();
        assert_eq!(grid.get(0, 0), Ok(Cell::Alive));
        assert_eq!(grid.get(1, 1), Ok(Cell::Alive));
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn non_x_symbols_are_dead() {
        let grid = parse("1 4 x.Xo").unwrap();
        assert_eq!(grid.to_string(), "--X-\n");
    }

    #[test]
    fn trailing_text_is_ignored() {
        let grid = parse("1 2\nXX\n\n# glider gun by someone\n").unwrap();
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn missing_header_is_reported() {
        assert!(matches!(parse(""), Err(LoadError::MissingDimension("row"))));
        assert!(matches!(parse("4"), Err(LoadError::MissingDimension("column"))));
    }

    #[test]
    fn non_integer_header_is_reported() {
        match parse("four 4") {
            Err(LoadError::BadDimension { what, token }) => {
                assert_eq!(what, "row");
                assert_eq!(token, "four");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn negative_dimensions_are_invalid() {
        assert!(matches!(
            parse("-1 3"),
            Err(LoadError::Grid(LifeError::InvalidDimensions { rows: -1, cols: 3 }))
        ));
    }

    #[test]
    fn short_input_is_truncated() {
        assert!(matches!(
            parse("2 2\nX-\nX"),
            Err(LoadError::Truncated { expected: 4, found: 3 })
        ));
    }

    #[test]
    fn huge_header_without_cells_does_not_allocate() {
        assert!(matches!(
            parse("1000000000 1000000000\nX"),
            Err(LoadError::Truncated { found: 1, .. })
        ));
    }
}
