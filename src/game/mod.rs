//! The interactive turn loop tying generator, input and statistics together

mod config;
mod core;
mod errors;
mod input;

pub use config::{GameConfig, MAX_INFINITE_TURNS};
pub use self::core::{Game, SessionEnd};
pub use errors::GameError;
pub use input::{prompt_game_count, read_answer};

#[cfg(test)]
mod tests;
