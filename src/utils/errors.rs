use thiserror::Error;

/// Errors that can occur while parsing user input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Answer must be a number: '{0}'")]
    InvalidAnswer(String),
    #[error("Number of games has to be an integer between 0 (infinite) and {max}!")]
    InvalidGameCount { input: String, max: u32 },
}
