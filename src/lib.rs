//! Arith-drill - An interactive arithmetic drill
//!
//! This library generates randomised arithmetic expressions, scores the answers
//! given to them and aggregates per-operator statistics into a text report.

pub mod expression;
pub mod game;
pub mod generator;
pub mod operator;
pub mod report;
pub mod statistics;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, ReportMarkers, Value};
pub use game::{Game, GameConfig, GameError, SessionEnd};
pub use generator::ExpressionGenerator;
pub use operator::{Operator, OperatorError, list_operators};
pub use report::{ReportError, write_report};
pub use statistics::Statistics;
pub use utils::{UtilsError, parse_game_count, parse_user_answer};

/// Generate one expression using a generator seeded from the operating system
///
/// # Arguments
///
/// * `allowed` - Operators to draw from; the first entry is never drawn
/// * `forced` - Operator to use regardless of `allowed`, or `Operator::Nothing`
///
/// # Errors
///
/// This function only fails if the expected result cannot be computed, which
/// difficulty smoothing rules out for generated operands.
///
/// # Examples
///
/// ```
/// use arith_drill::{Operator, generate_expression};
///
/// match generate_expression(&Operator::real_operators(), Operator::Multiply) {
///     Ok(expr) => println!("{}", expr),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn generate_expression(
    allowed: &[Operator],
    forced: Operator,
) -> Result<Expression, ExpressionError> {
    ExpressionGenerator::from_entropy().generate(allowed, forced)
}
