// main.rs - Graphical Conway's Game of Life

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use conway::{loader, patterns, Grid, Simulation, WrapPolicy};
use eframe::egui;
use tracing::info;

mod app;
mod ui;

use app::GameOfLife;

#[derive(Parser, Debug)]
#[command(name = "conway_gui")]
#[command(version)]
#[command(about = "Conway's Game of Life in a window", long_about = None)]
struct Cli {
    /// Grid input file; an empty grid is used when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Start with wrapped (toroidal) edges
    #[arg(short, long)]
    wrap: bool,

    /// Rows of the empty grid
    #[arg(long, default_value = "50")]
    rows: usize,

    /// Columns of the empty grid
    #[arg(long, default_value = "50")]
    cols: usize,

    /// Starting pattern name (e.g. "Glider", "Pulsar")
    #[arg(short, long)]
    pattern: Option<String>,

    /// Step each row as its own tokio task
    #[arg(long)]
    coro: bool,
}

impl Cli {
    fn initial_grid(&self) -> Result<Grid> {
        if let Some(path) = &self.file {
            return loader::load_file(path)
                .with_context(|| format!("failed to load grid from {}", path.display()));
        }

        let mut grid = Grid::new(self.rows, self.cols)?;
        if let Some(name) = &self.pattern {
            let pattern = patterns::find(name).ok_or_else(|| anyhow!("unknown pattern {name:?}"))?;
            patterns::apply(&mut grid, pattern);
        }
        Ok(grid)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let grid = cli.initial_grid()?;
    info!(rows = grid.rows(), cols = grid.cols(), wrap = cli.wrap, "Opening window");

    let mut app = GameOfLife::new(Simulation::new(grid, WrapPolicy::from(cli.wrap)));
    app.set_row_coroutines(cli.coro);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window closed with error: {err:?}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
