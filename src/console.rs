//! Console prompts for the values a battle needs before it starts.

use crate::errors::InputError;
use std::io::{BufRead, Write};
use tracing::debug;

pub const RETRY_MESSAGE: &str = "Please enter a positive whole number.";

/// Prompts until the user enters a positive whole number.
///
/// Only plain digits are accepted (no sign, no separators), after trimming
/// surrounding whitespace. Invalid entries re-prompt; end of input fails with
/// [`InputError::Exhausted`].
pub fn read_positive_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<i32, InputError> {
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Exhausted);
        }

        match parse_positive_int(&line) {
            Some(value) => return Ok(value),
            None => {
                debug!(entry = line.trim(), "rejected console entry");
                writeln!(output, "{}", RETRY_MESSAGE)?;
            }
        }
    }
}

fn parse_positive_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i32>().ok().filter(|value| *value > 0)
}
