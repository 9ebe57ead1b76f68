// Prompt layer: where lines of user input come from, plus the
// read-validate-retry helper every menu question goes through.

use crate::style;
use anyhow::{bail, Result};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// A source of input lines. The binary reads the terminal; tests feed
/// scripted answers.
pub trait LineSource {
    /// Show `prompt` and read one line. `Ok(None)` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads from stdin. Uses `dialoguer` line editing when attached to a
/// terminal and plain line reads when input is piped.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if io::stdin().is_terminal() {
            // `Input::interact_text()` renders "<prompt>: " and returns the line.
            let line: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .report(false)
                .interact_text()?;
            return Ok(Some(line));
        }

        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Ask `prompt` until `is_valid` accepts the trimmed answer, printing
/// `error` after each rejection. Returns the accepted, trimmed answer.
///
/// The only way out besides a valid answer is the input closing, which is
/// an error.
pub fn prompt_validated<L, W, F>(
    input: &mut L,
    out: &mut W,
    prompt: &str,
    is_valid: F,
    error: &str,
) -> Result<String>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
    F: Fn(&str) -> bool,
{
    loop {
        let Some(line) = input.read_line(prompt)? else {
            bail!("input closed while waiting for an answer to `{prompt}`");
        };
        let answer = line.trim();
        if is_valid(answer) {
            return Ok(answer.to_string());
        }
        style::warning(out, error)?;
    }
}
