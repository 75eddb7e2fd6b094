//! Line-oriented prompting.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;

use crate::errors::CliError;

use super::parsing::parse_integer;

/// Reads answers from a line source and writes prompts to a sink.
///
/// Every `ask*` method returns `Ok(None)` once the input is exhausted, so
/// callers can wind down cleanly on end of input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prompt for one line of input, without its line ending.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is
    /// just another answer for the caller to reject.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prompt until `parse` accepts the answer, printing `retry` after each
    /// rejected one.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&answer) {
                return Ok(Some(value));
            }
            self.say(retry)?;
        }
    }

    /// Prompt until the answer is an integer.
    pub fn ask_integer(&mut self, prompt: &str, retry: &str) -> io::Result<Option<i64>> {
        self.ask_until(prompt, retry, parse_integer)
    }

    /// Consume the prompter and return the output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Ask for delete confirmation on a terminal.
///
/// Without a terminal there is nobody to ask, so `--yes` is required.
pub fn confirm_delete(prompt: &str) -> anyhow::Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "Refusing to delete without confirmation.\nHint: Pass --yes to delete non-interactively.",
        )
        .into());
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
