// main.rs - Console Game of Life: load a grid file, then tick or animate it

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use conway::{loader, Simulation, WrapPolicy};
use tracing::info;

mod prompt;
mod session;

use prompt::Prompter;
use session::AnimationOptions;

#[derive(Parser, Debug)]
#[command(name = "conway_console")]
#[command(version)]
#[command(about = "Conway's Game of Life in the console", long_about = None)]
struct Cli {
    /// Grid input file (asked for interactively when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Wrap the grid edges around (torus) without asking
    #[arg(long, conflicts_with = "no_wrap")]
    wrap: bool,

    /// Keep the grid edges bounded without asking
    #[arg(long)]
    no_wrap: bool,

    /// Pause between animation frames in milliseconds
    #[arg(short, long, default_value = "50")]
    delay_ms: u64,

    /// Do not clear the screen between animation frames
    #[arg(long)]
    no_clear: bool,
}

impl Cli {
    fn wrap_preset(&self) -> Option<WrapPolicy> {
        match (self.wrap, self.no_wrap) {
            (true, _) => Some(WrapPolicy::Wrapped),
            (_, true) => Some(WrapPolicy::Bounded),
            _ => None,
        }
    }

    fn animation(&self) -> AnimationOptions {
        AnimationOptions {
            delay: Duration::from_millis(self.delay_ms),
            clear: !self.no_clear,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    prompter.say(session::WELCOME)?;

    let grid = match &cli.file {
        Some(path) => loader::load_file(path)
            .with_context(|| format!("failed to load grid from {}", path.display()))?,
        None => session::prompt_for_grid(&mut prompter)?,
    };
    let wrap = session::choose_wrap(&mut prompter, cli.wrap_preset())?;

    info!(rows = grid.rows(), cols = grid.cols(), ?wrap, "Starting simulation");
    let mut sim = Simulation::new(grid, wrap);
    session::run(&mut prompter, &mut sim, &cli.animation())?;

    info!(generation = sim.generation(), "Simulation ended");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn wrap_flags_map_to_policy() {
        let cli = Cli::parse_from(["conway_console", "--wrap"]);
        assert_eq!(cli.wrap_preset(), Some(WrapPolicy::Wrapped));
        let cli = Cli::parse_from(["conway_console", "--no-wrap"]);
        assert_eq!(cli.wrap_preset(), Some(WrapPolicy::Bounded));
        let cli = Cli::parse_from(["conway_console"]);
        assert_eq!(cli.wrap_preset(), None);
    }

    #[test]
    fn wrap_flags_conflict() {
        assert!(Cli::try_parse_from(["conway_console", "--wrap", "--no-wrap"]).is_err());
    }

    #[test]
    fn animation_defaults_match_classic_pause() {
        let cli = Cli::parse_from(["conway_console", "-f", "life.txt"]);
        let options = cli.animation();
        assert_eq!(options.delay, Duration::from_millis(50));
        assert!(options.clear);
        assert_eq!(cli.file, Some(PathBuf::from("life.txt")));
    }
}
