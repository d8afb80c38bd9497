use std::io::{BufRead, Write};

use log::debug;

use crate::game::errors::GameError;
use crate::utils::{parse_game_count, parse_user_answer};

const GAME_COUNT_PROMPT: &str = "Please type the number of games: ";

/// Reads one line, replacing bytes that are not UTF-8 so they fail to parse
/// like any other bad answer. Returns `None` at end of input.
fn next_line<I: BufRead>(input: &mut I, buf: &mut Vec<u8>) -> Result<Option<String>, GameError> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Reads answers until one parses, indenting each retry by `indent` spaces.
///
/// Returns `Ok(None)` once the input is exhausted.
///
/// # Errors
///
/// Returns an error if reading the input or writing the indent fails.
pub fn read_answer<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
    indent: usize,
) -> Result<Option<f64>, GameError> {
    let mut buf = Vec::new();
    loop {
        let Some(line) = next_line(input, &mut buf)? else {
            debug!("Input closed while waiting for an answer");
            return Ok(None);
        };

        match parse_user_answer(&line) {
            Ok(answer) => return Ok(Some(answer)),
            Err(err) => {
                debug!("Re-prompting after invalid answer: {}", err);
                write!(output, "{}", " ".repeat(indent))?;
                output.flush()?;
            }
        }
    }
}

/// Asks for the session length until a valid one is typed.
///
/// # Errors
///
/// Returns [`GameError::InputClosed`] if the input ends first, or an I/O error.
pub fn prompt_game_count<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
) -> Result<u32, GameError> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", GAME_COUNT_PROMPT)?;
        output.flush()?;

        let Some(line) = next_line(input, &mut buf)? else {
            return Err(GameError::InputClosed);
        };

        match parse_game_count(&line) {
            Ok(count) => return Ok(count),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}
