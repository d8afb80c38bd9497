use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Upper bound of a finite session's length
pub const MAX_GAMES: u32 = 1024;

/// Parses the session length; 0 stands for an infinite session.
///
/// # Errors
///
/// Returns an error unless the text is an integer in `0..=MAX_GAMES`.
pub fn parse_game_count(text: &str) -> Result<u32, UtilsError> {
    let trimmed = text.trim();
    debug!("Parsing number of games: '{}'", trimmed);

    match trimmed.parse::<u32>() {
        Ok(count) if count <= MAX_GAMES => Ok(count),
        _ => {
            warn!("Rejecting number of games: '{}'", trimmed);
            Err(UtilsError::InvalidGameCount {
                input: trimmed.to_string(),
                max: MAX_GAMES,
            })
        }
    }
}
