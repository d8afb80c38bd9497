//! Parsing of user-typed input

mod answer;
mod errors;
mod validation;

pub use answer::parse_user_answer;
pub use errors::UtilsError;
pub use validation::{MAX_GAMES, parse_game_count};

#[cfg(test)]
mod tests;
