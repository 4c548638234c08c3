// src/input.rs
//! Line-oriented prompts on top of any reader/writer pair.

#![deny(missing_docs)]

use crate::error::{StackError, StackResult};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Invalid answers tolerated before a prompt gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Asks questions on `out` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    out: W,
    max_attempts: usize,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Prompter bound to the process terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap a reader and writer.
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Change how many invalid answers are accepted before failing.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Writer the prompts go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the prompter and hand back the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Print `prompt` and block for one line; the line ending is stripped.
    pub fn get_input(&mut self, prompt: &str) -> StackResult<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StackError::InputClosed.into());
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        tracing::trace!(prompt, answer = %answer, "read answer");
        Ok(answer)
    }

    /// Yes/no question where an empty answer means yes.
    ///
    /// `n` and `N` both decline; anything unrecognised asks again.
    pub fn confirm(&mut self, question: &str) -> StackResult<bool> {
        let prompt = format!("{question} (Y/n) ");
        for _ in 0..self.max_attempts {
            match self.get_input(&prompt)?.as_str() {
                "" | "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                other => tracing::debug!(answer = other, "unrecognised confirmation"),
            }
        }
        Err(StackError::TooManyAttempts(self.max_attempts).into())
    }

    /// Print a numbered list and return the chosen entry.
    ///
    /// A non-numeric answer is an error; a negative index or one past the end
    /// asks again.
    pub fn select_from(&mut self, options: &[String]) -> StackResult<String> {
        for _ in 0..self.max_attempts {
            writeln!(self.out, "Choices:")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.out, "[ {i} ]: {option}")?;
            }
            let raw = self.get_input("Enter Number of Selection: ")?;
            let sel: i64 = raw
                .trim()
                .parse()
                .map_err(|_| StackError::InvalidSelection(raw.clone()))?;
            if let Some(choice) = usize::try_from(sel).ok().and_then(|i| options.get(i)) {
                return Ok(choice.clone());
            }
        }
        Err(StackError::TooManyAttempts(self.max_attempts).into())
    }

    /// Store the trimmed answer to `prompt` in `target`.
    pub fn set_from_input(&mut self, target: &mut String, prompt: &str) -> StackResult<()> {
        *target = self.get_input(prompt)?.trim().to_string();
        Ok(())
    }
}
