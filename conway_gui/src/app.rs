// app.rs - GUI game state on top of the shared engine

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use conway::{patterns, Simulation, WrapPolicy};
use egui::Color32;
use tracing::{info, warn};

/// Number of recent grid fingerprints kept for cycle detection.
const HISTORY_LEN: usize = 10;

pub struct GameOfLife {
    sim: Simulation,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    /// Frame count used by the Animate button.
    pub animate_frames: u32,
    /// Frames left in the current animation; `None` runs until paused.
    frames_remaining: Option<u32>,

    /// Present while row-coroutine stepping is enabled.
    runtime: Option<tokio::runtime::Runtime>,

    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
    random_seed: u64,
}

impl GameOfLife {
    pub fn new(sim: Simulation) -> Self {
        let mut app = Self {
            sim,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            animate_frames: 10,
            frames_remaining: None,
            runtime: None,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
            random_seed: 0,
        };
        app.forget_history();
        app
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn uses_row_coroutines(&self) -> bool {
        self.runtime.is_some()
    }

    /// Switch between the synchronous stepper and per-row tokio tasks.
    pub fn set_row_coroutines(&mut self, enabled: bool) {
        if enabled == self.uses_row_coroutines() {
            return;
        }
        if !enabled {
            self.runtime = None;
            info!("Row coroutines disabled");
            return;
        }
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => {
                self.runtime = Some(runtime);
                info!("Row coroutines enabled");
            }
            Err(err) => warn!(error = %err, "Could not start tokio runtime; staying synchronous"),
        }
    }

    /// Change edge policy; earlier fingerprints no longer predict anything.
    pub fn set_wrap(&mut self, wrap: WrapPolicy) {
        if wrap != self.sim.wrap() {
            self.sim.set_wrap(wrap);
            self.forget_history();
        }
    }

    /// Run continuously until paused or a cycle is found.
    pub fn start(&mut self) {
        self.is_running = true;
        self.frames_remaining = None;
        self.last_update = Instant::now();
    }

    /// Run exactly `animate_frames` generations, then pause.
    pub fn start_animation(&mut self) {
        if self.animate_frames == 0 {
            return;
        }
        self.is_running = true;
        self.frames_remaining = Some(self.animate_frames);
        self.last_update = Instant::now();
    }

    pub fn pause(&mut self) {
        self.is_running = false;
        self.frames_remaining = None;
    }

    pub fn frames_remaining(&self) -> Option<u32> {
        self.frames_remaining
    }

    /// Called by the frame loop; steps once if running and the interval elapsed.
    pub fn step_if_due(&mut self) -> bool {
        if !self.is_running || self.last_update.elapsed() < self.update_interval {
            return false;
        }
        self.update_generation();
        self.last_update = Instant::now();

        if let Some(left) = self.frames_remaining.as_mut() {
            *left = left.saturating_sub(1);
            if *left == 0 {
                self.pause();
            }
        }
        true
    }

    pub fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        patterns::randomize(self.sim.grid_mut(), self.random_seed, patterns::DEFAULT_DENSITY);
        self.sim.restart_count();
        self.forget_history();
    }

    /// Flip a cell; ignored while running or outside the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.is_running {
            return;
        }
        if self.sim.grid_mut().toggle(row, col).is_ok() {
            self.forget_history();
        }
    }

    fn forget_history(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
        let current = self.hash_grid();
        self.remember(current);
    }

    fn remember(&mut self, hash: u64) {
        self.grid_history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }
}

/// Actions the UI drives.
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn hash_grid(&self) -> u64;
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        match &self.runtime {
            Some(runtime) => {
                let wrap = self.sim.wrap();
                let mut next = self.sim.grid().clone();
                match runtime.block_on(conway::coro::tick_rows(&mut next, wrap)) {
                    Ok(()) => self.sim.commit(next),
                    Err(err) => {
                        warn!(error = %err, "Row coroutine step failed");
                        self.pause();
                        return;
                    }
                }
            }
            None => self.sim.tick(),
        }

        // Counted animations always run every frame
        if self.frames_remaining.is_none() && self.check_for_cycle() {
            info!(generation = self.sim.generation(), "Pattern repeats; pausing");
            self.pause();
        }
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.sim.grid().hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..seen].contains(&current_hash) {
            return true;
        }
        self.remember(current_hash);
        false
    }

    fn clear_grid(&mut self) {
        self.sim.grid_mut().clear();
        self.sim.restart_count();
        self.forget_history();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply(self.sim.grid_mut(), pattern);
            self.sim.restart_count();
            self.forget_history();
        }
    }
}
