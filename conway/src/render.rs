// render.rs - Render capability invoked by driving loops after a tick

use std::io::{self, Write};

use crate::grid::Grid;

/// Something that can show a grid: a console, a window, a test recorder.
///
/// The stepper never calls this; drivers do, once per displayed generation.
pub trait Render {
    type Error;

    fn render(&mut self, grid: &Grid) -> Result<(), Self::Error>;
}

/// Prints each generation as rows of `X` and `-`.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        write!(self.out, "{grid}")?;
        self.out.flush()
    }
}
