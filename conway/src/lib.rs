// lib.rs - Conway's Game of Life engine shared by the console and GUI drivers

pub mod error;
pub mod grid;
pub mod neighbors;
pub mod rules;
pub mod stepper;
pub mod loader;
pub mod patterns;
pub mod render;
pub mod simulation;

#[cfg(feature = "coro")]
pub mod coro;

pub use error::{LifeError, LoadError};
pub use grid::{Cell, Grid};
pub use neighbors::{count_live_neighbors, WrapPolicy};
pub use rules::next_state;
pub use stepper::{tick, Stepper};
pub use render::{Render, TextRenderer};
pub use simulation::Simulation;
