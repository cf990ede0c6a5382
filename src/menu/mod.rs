//! Menu Module
//!
//! Line-based console menus for both programs.
//!
//! Both loops are generic over a `BufRead` input and a `Write` output so the
//! binaries pass locked stdin/stdout and tests pass in-memory buffers. End of
//! input is treated as the exit command.

mod calories;
mod library;

pub use calories::{run_tracker, CalorieLog, Meal};
pub use library::run_library;

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt/answer helper over a line-based input and an output sink
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `prompt` and read one line without its line ending
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask until the trimmed answer is non-empty
    pub fn ask_non_empty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            match self.ask(prompt)? {
                None => return Ok(None),
                Some(answer) => {
                    let answer = answer.trim();
                    if !answer.is_empty() {
                        return Ok(Some(answer.to_string()));
                    }
                    self.say("Input cannot be empty.")?;
                }
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
