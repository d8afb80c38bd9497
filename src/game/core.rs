use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::game::config::GameConfig;
use crate::game::errors::GameError;
use crate::game::input::read_answer;
use crate::generator::ExpressionGenerator;
use crate::operator::Operator;
use crate::statistics::Statistics;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A finite session played all of its turns
    Completed,
    /// An infinite session got a wrong answer
    WrongAnswer,
    /// An infinite session reached its turn cap
    TurnCap,
    /// The input ended mid-session
    InputClosed,
}

/// One drill session
pub struct Game<R: Rng = StdRng> {
    config: GameConfig,
    generator: ExpressionGenerator<R>,
    statistics: Statistics,
}

impl Game<StdRng> {
    /// Create a session seeded from `config.seed`, or from entropy without one
    pub fn new(config: GameConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => ExpressionGenerator::from_seed(seed),
            None => ExpressionGenerator::from_entropy(),
        };
        Self::with_generator(config, generator)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_generator(config: GameConfig, generator: ExpressionGenerator<R>) -> Self {
        let statistics =
            Statistics::new(config.games, &config.operators).with_markers(config.markers.clone());
        Self {
            config,
            generator,
            statistics,
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Plays the whole session, reading answers from `input` and writing
    /// turn lines to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if an expression cannot be built.
    pub fn play<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        output: &mut W,
    ) -> Result<SessionEnd, GameError> {
        info!(
            "Starting {} session with {} planned games",
            if self.config.games == 0 { "infinite" } else { "finite" },
            self.config.games
        );
        writeln!(output)?;

        let end = if self.config.games == 0 {
            self.play_infinite(input, output)?
        } else {
            self.play_finite(input, output)?
        };

        writeln!(output, "\nYour game is OVER.")?;
        output.flush()?;
        info!(
            "Session ended ({:?}): {} of {} right",
            end,
            self.statistics.total_right(),
            self.statistics.total_turns()
        );
        Ok(end)
    }

    fn play_finite<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        output: &mut W,
    ) -> Result<SessionEnd, GameError> {
        for turn in 1..=self.config.games {
            if self.play_turn(turn, input, output)?.is_none() {
                return Ok(SessionEnd::InputClosed);
            }
        }
        Ok(SessionEnd::Completed)
    }

    fn play_infinite<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        output: &mut W,
    ) -> Result<SessionEnd, GameError> {
        for turn in 1..=self.config.max_infinite_turns {
            match self.play_turn(turn, input, output)? {
                None => return Ok(SessionEnd::InputClosed),
                Some(false) => return Ok(SessionEnd::WrongAnswer),
                Some(true) => {}
            }
        }
        Ok(SessionEnd::TurnCap)
    }

    /// Plays one turn. Returns whether the answer was right, or `None` if the
    /// input ended before an answer arrived.
    fn play_turn<I: BufRead, W: Write>(
        &mut self,
        turn: u32,
        input: &mut I,
        output: &mut W,
    ) -> Result<Option<bool>, GameError> {
        let mut expression = self
            .generator
            .generate(&self.config.operators, Operator::Nothing)?;

        let line = format!("{:<4}: {}", turn, expression.prompt());
        write!(output, "{}", line)?;
        output.flush()?;

        let Some(answer) = read_answer(input, output, line.chars().count())? else {
            return Ok(None);
        };
        expression.set_user_result(answer);

        let correct = expression.is_correct();
        debug!("Turn {} answered {} ({})", turn, answer, correct);
        self.statistics.record_turn(expression);
        Ok(Some(correct))
    }
}
