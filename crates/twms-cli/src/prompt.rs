//! Line-based operator prompts
//!
//! Numeric prompts re-ask until the answer parses and lies in range; text
//! prompts re-ask until the answer is non-empty. End of input surfaces as
//! [`Error::InputClosed`].

use std::io::{BufRead, Write};

use twms_types::{Error, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let line = self.ask(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => writeln!(self.output, "Error: Input must be between {} and {}.", min, max)?,
                Err(_) => writeln!(self.output, "Error: Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Trimmed, non-empty answer
    pub fn read_text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.ask(prompt)?;
            let text = line.trim();
            if !text.is_empty() {
                return Ok(text.to_string());
            }
            writeln!(self.output, "Error: Input cannot be empty.")?;
        }
    }

    /// True only for an answer starting with `y` or `Y`
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let line = self.ask(prompt)?;
        Ok(matches!(line.trim_start().chars().next(), Some('y' | 'Y')))
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }
}
