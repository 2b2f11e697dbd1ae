// session.rs - The console command loop: load, choose edges, tick or animate

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use conway::{loader, Grid, Render, Simulation, TextRenderer, WrapPolicy};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::{debug, info, warn};

use crate::prompt::Prompter;

pub const WELCOME: &str = "Welcome to the Game Of Life,\n\
a simulation of the lifecycle of a bacteria colony.\n\
Cells (X) live and die by the following rules:\n\
- A cell with 1 or fewer neighbors dies.\n\
- Locations with 2 neighbors remain stable.\n\
- Locations with 3 neighbors will create life.\n\
- A cell with 4 or more neighbors dies.\n";

pub const FILE_PROMPT: &str = "Grid input file name? ";
pub const WRAP_PROMPT: &str = "Should the simulation wrap around the grid (y/n)? ";
pub const COMMAND_PROMPT: &str = "a)nimate, t)ick, q)uit? ";
pub const FRAMES_PROMPT: &str = "How many frames? ";
pub const FAREWELL: &str = "Have a nice Life!";

/// A request typed at the command prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Animate,
    Tick,
    Quit,
}

impl Command {
    /// Only the first character counts, case-insensitively.
    pub fn parse(line: &str) -> Option<Self> {
        match line.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a') => Some(Command::Animate),
            Some('t') => Some(Command::Tick),
            Some('q') => Some(Command::Quit),
            _ => None,
        }
    }
}

/// How animation frames are shown.
#[derive(Debug, Clone)]
pub struct AnimationOptions {
    /// Pause after each frame.
    pub delay: Duration,
    /// Clear the terminal before each frame.
    pub clear: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self { delay: Duration::from_millis(50), clear: true }
    }
}

/// Renderer for animation: clear, print, pause.
struct FrameRenderer<'a, W: Write> {
    out: &'a mut W,
    options: &'a AnimationOptions,
}

impl<W: Write> Render for FrameRenderer<'_, W> {
    type Error = io::Error;

    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        if self.options.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out, "==================== (console cleared) ====================")?;
        TextRenderer::new(&mut *self.out).render(grid)?;
        if !self.options.delay.is_zero() {
            thread::sleep(self.options.delay);
        }
        Ok(())
    }
}

/// Ask for file names until one loads.
pub fn prompt_for_grid<R: BufRead, W: Write, E: Write>(prompter: &mut Prompter<R, W, E>) -> io::Result<Grid> {
    loop {
        let name = prompter.line(FILE_PROMPT)?;
        match loader::load_file(Path::new(name.trim())) {
            Ok(grid) => return Ok(grid),
            Err(err) => {
                warn!(file = %name, error = %err, "Rejected grid input");
                prompter.complain(&format!("Unable to open that file. Try again. ({err})"))?;
            }
        }
    }
}

/// Use the edge policy given on the command line, or ask.
pub fn choose_wrap<R: BufRead, W: Write, E: Write>(
    prompter: &mut Prompter<R, W, E>,
    preset: Option<WrapPolicy>,
) -> io::Result<WrapPolicy> {
    match preset {
        Some(wrap) => Ok(wrap),
        None => Ok(WrapPolicy::from(prompter.yes_or_no(WRAP_PROMPT)?)),
    }
}

/// Show the grid, then serve commands until the user quits.
pub fn run<R: BufRead, W: Write, E: Write>(
    prompter: &mut Prompter<R, W, E>,
    sim: &mut Simulation,
    options: &AnimationOptions,
) -> io::Result<()> {
    TextRenderer::new(prompter.output()).render(sim.grid())?;

    loop {
        let command = loop {
            let answer = prompter.line(COMMAND_PROMPT)?;
            match Command::parse(answer.trim_start()) {
                Some(command) => break command,
                None => prompter.complain("Answer not recognized. Try again.")?,
            }
        };
        debug!(?command, generation = sim.generation(), "Command");

        match command {
            Command::Tick => {
                sim.tick();
                TextRenderer::new(prompter.output()).render(sim.grid())?;
            }
            Command::Animate => {
                let frames = usize::try_from(prompter.integer(FRAMES_PROMPT)?).unwrap_or(0);
                let banner = if options.clear {
                    format!(
                        "({frames} new generations are shown, with screen clear and {}ms pause before each)",
                        options.delay.as_millis()
                    )
                } else {
                    format!("({frames} new generations are shown)")
                };
                prompter.say(&banner)?;

                let mut renderer = FrameRenderer { out: prompter.output(), options };
                sim.animate(frames, &mut renderer)?;
                info!(frames, generation = sim.generation(), "Animation finished");
            }
            Command::Quit => {
                prompter.say(FAREWELL)?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const BLINKER: &str = "-----\n-----\n-XXX-\n-----\n-----\n";
    const BLINKER_VERTICAL: &str = "-----\n--X--\n--X--\n--X--\n-----\n";

    fn quiet() -> AnimationOptions {
        AnimationOptions { delay: Duration::ZERO, clear: false }
    }

    type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn prompter(input: &[u8]) -> TestPrompter {
        Prompter::with_errors(Cursor::new(input.to_vec()), Vec::new(), Vec::new())
    }

    /// Runs a session, returning the simulation, stdout text and stderr text.
    fn play_both(input: &str, wrap: WrapPolicy) -> (Simulation, String, String) {
        let grid = loader::parse(&format!("5 5\n{BLINKER}")).unwrap();
        let mut sim = Simulation::new(grid, wrap);
        let mut prompter = prompter(input.as_bytes());
        run(&mut prompter, &mut sim, &quiet()).unwrap();
        let out = String::from_utf8(prompter.output().clone()).unwrap();
        let errors = String::from_utf8(prompter.errors().clone()).unwrap();
        (sim, out, errors)
    }

    fn play(input: &str, wrap: WrapPolicy) -> (Simulation, String) {
        let (sim, out, _) = play_both(input, wrap);
        (sim, out)
    }

    #[test]
    fn parses_commands_by_first_letter() {
        assert_eq!(Command::parse("animate"), Some(Command::Animate));
        assert_eq!(Command::parse("T"), Some(Command::Tick));
        assert_eq!(Command::parse("quit now"), Some(Command::Quit));
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn quit_right_away_prints_grid_and_farewell() {
        let (sim, out) = play("q\n", WrapPolicy::Bounded);
        assert_eq!(sim.generation(), 0);
        assert_eq!(out, format!("{BLINKER}{COMMAND_PROMPT}{FAREWELL}\n"));
    }

    #[test]
    fn tick_prints_next_generation() {
        let (sim, out) = play("t\nq\n", WrapPolicy::Bounded);
        assert_eq!(sim.generation(), 1);
        assert!(out.contains(BLINKER_VERTICAL));
        assert_eq!(sim.grid().to_string(), BLINKER_VERTICAL);
    }

    #[test]
    fn unknown_commands_are_rejected() {
        let (sim, out, errors) = play_both("hello\nQ\n", WrapPolicy::Bounded);
        assert_eq!(sim.generation(), 0);
        assert_eq!(errors, "Answer not recognized. Try again.\n");
        assert!(!out.contains("Answer not recognized"));
        assert_eq!(out.matches(COMMAND_PROMPT).count(), 2);
    }

    #[test]
    fn animate_runs_requested_frames() {
        let (sim, out) = play("a\nthree\n3\nq\n", WrapPolicy::Wrapped);
        assert_eq!(sim.generation(), 3);
        assert!(out.contains("(3 new generations are shown)"));
        assert!(out.contains("Illegal integer format"));
        assert_eq!(out.matches("(console cleared)").count(), 3);
        assert_eq!(sim.grid().to_string(), BLINKER_VERTICAL);
    }

    #[test]
    fn negative_frame_count_animates_nothing() {
        let (sim, _) = play("a\n-4\nq\n", WrapPolicy::Bounded);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn wrap_preset_skips_question() {
        let mut prompter = prompter(b"");
        let wrap = choose_wrap(&mut prompter, Some(WrapPolicy::Wrapped)).unwrap();
        assert_eq!(wrap, WrapPolicy::Wrapped);
        assert!(prompter.output().is_empty());
    }

    #[test]
    fn wrap_question_maps_answer() {
        let mut prompter = prompter(b"y\n");
        assert_eq!(choose_wrap(&mut prompter, None).unwrap(), WrapPolicy::Wrapped);
    }

    #[test]
    fn bad_file_names_are_reprompted() {
        let mut prompter = prompter(b"/definitely/not/here.txt\n");
        // The second prompt hits end of input, which ends the loop.
        let err = prompt_for_grid(&mut prompter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        let out = String::from_utf8(prompter.output().clone()).unwrap();
        let errors = String::from_utf8(prompter.errors().clone()).unwrap();
        assert!(errors.starts_with("Unable to open that file. Try again."));
        assert!(!out.contains("Unable to open"));
        assert_eq!(out.matches(FILE_PROMPT).count(), 2);
    }
}
