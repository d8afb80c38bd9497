use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::expression::{Expression, ExpressionError};
use crate::generator::constants::{LEFT_MAX, LEFT_MIN, RIGHT_MAX, RIGHT_MIN};
use crate::generator::smoothing::smooth_operands;
use crate::operator::Operator;

/// Draws random expressions for a drill
pub struct ExpressionGenerator<R: Rng = StdRng> {
    rng: R,
}

impl ExpressionGenerator<StdRng> {
    /// Create a generator whose sequence is fully determined by `seed`
    pub fn from_seed(seed: u64) -> Self {
        info!("Seeding expression generator with {}", seed);
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ExpressionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses the operator of the next expression.
    ///
    /// A `forced` operator other than `Nothing` always wins. Otherwise one
    /// entry of `allowed` is drawn uniformly, skipping index 0; callers put
    /// the entry that must never be drawn first. An empty `allowed` means
    /// every real operator. A single entry is returned as is.
    pub fn pick_operator(&mut self, allowed: &[Operator], forced: Operator) -> Operator {
        if !forced.is_no_op() {
            return forced;
        }

        let defaults;
        let pool = if allowed.is_empty() {
            defaults = Operator::real_operators();
            defaults.as_slice()
        } else {
            allowed
        };

        let index = match pool.len() {
            0 | 1 => 0,
            len => self.rng.gen_range(1..len),
        };
        pool.get(index).copied().unwrap_or(Operator::Nothing)
    }

    /// # Errors
    ///
    /// Smoothing keeps every divisor at 1 or above, so generated expressions
    /// only fail if the expected result cannot be computed.
    pub fn generate(
        &mut self,
        allowed: &[Operator],
        forced: Operator,
    ) -> Result<Expression, ExpressionError> {
        let left = self.rng.gen_range(LEFT_MIN..=LEFT_MAX);
        let right = self.rng.gen_range(RIGHT_MIN..=RIGHT_MAX);
        let operator = self.pick_operator(allowed, forced);
        debug!("Drew {} {} {} before smoothing", left, operator, right);

        let (left, right) = smooth_operands(operator, left, right);
        Expression::new(left, operator, right)
    }
}
