// prompt.rs - Line-oriented questions over any reader/writer pair

use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads answers from `input`, re-asking until
/// the answer has the right shape. End of input is an `UnexpectedEof` error.
/// Complaints about unusable answers go to `errors`.
pub struct Prompter<R, W, E = io::Stderr> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_errors(input, output, io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn with_errors(input: R, output: W, errors: E) -> Self {
        Self { input, output, errors }
    }

    pub fn errors(&mut self) -> &mut E {
        &mut self.errors
    }

    /// Print a message on the error stream.
    pub fn complain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.errors, "{message}")?;
        self.errors.flush()
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a message followed by a newline.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Print `prompt` and return the next input line without its line ending.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until the answer starts with `y` or `n` (any case).
    pub fn yes_or_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.line(prompt)?;
            match answer.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                _ => self.say("Please type a word that starts with 'Y' or 'N'.")?,
            }
        }
    }

    /// Ask until the answer is a whole integer.
    pub fn integer(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            let answer = self.line(prompt)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Illegal integer format. Try again.")?,
            }
        }
    }
}
