// simulation.rs - A running game: grid, edge policy, generation counter

use tracing::trace;

use crate::grid::Grid;
use crate::neighbors::WrapPolicy;
use crate::render::Render;
use crate::stepper::Stepper;

/// Everything a driver carries between commands.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    wrap: WrapPolicy,
    generation: u64,
    stepper: Stepper,
}

impl Simulation {
    pub fn new(grid: Grid, wrap: WrapPolicy) -> Self {
        Self { grid, wrap, generation: 0, stepper: Stepper::new() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct access for editing cells between ticks.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn wrap(&self) -> WrapPolicy {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: WrapPolicy) {
        self.wrap = wrap;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start over from `grid` at generation zero.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }

    /// Zero the generation counter, keeping the current cells.
    pub fn restart_count(&mut self) {
        self.generation = 0;
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        self.stepper.tick(&mut self.grid, self.wrap);
        self.generation += 1;
        trace!(generation = self.generation, live = self.grid.live_count(), "Tick");
    }

    /// Replace the grid with an externally computed next generation.
    pub fn commit(&mut self, next: Grid) {
        debug_assert_eq!((next.rows(), next.cols()), (self.grid.rows(), self.grid.cols()));
        self.grid = next;
        self.generation += 1;
    }

    /// Run `frames` ticks, rendering after each one.
    pub fn animate<R: Render>(&mut self, frames: usize, renderer: &mut R) -> Result<(), R::Error> {
        for _ in 0..frames {
            self.tick();
            renderer.render(&self.grid)?;
        }
        Ok(())
    }
}
