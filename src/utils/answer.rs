use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parses a typed answer, accepting `,` as the decimal separator.
///
/// # Errors
///
/// Returns an error if the text is empty, not a number, or not finite.
pub fn parse_user_answer(text: &str) -> Result<f64, UtilsError> {
    let trimmed = text.trim();
    debug!("Parsing user answer: '{}'", trimmed);

    let value = trimmed.replace(',', ".").parse::<f64>().map_err(|_| {
        warn!("Answer is not a number: '{}'", trimmed);
        UtilsError::InvalidAnswer(trimmed.to_string())
    })?;

    if !value.is_finite() {
        warn!("Answer is not finite: '{}'", trimmed);
        return Err(UtilsError::InvalidAnswer(trimmed.to_string()));
    }

    Ok(value)
}
