use log::{debug, warn};

use crate::expression::ast::{Expression, UserResult, Value};
use crate::expression::errors::ExpressionError;
use crate::operator::Operator;

fn overflow(left: i64, operator: Operator, right: i64) -> ExpressionError {
    ExpressionError::Overflow {
        left,
        operator: operator.glyph().to_string(),
        right,
    }
}

/// Integer division rounding toward negative infinity
#[inline]
fn floor_div(left: i64, right: i64) -> Option<i64> {
    let quotient = left.checked_div(right)?;
    if left % right != 0 && ((left < 0) != (right < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Remainder whose sign follows the divisor: `left - right * floor(left / right)`
#[inline]
fn floor_mod(left: i64, right: i64) -> Option<i64> {
    let remainder = left.checked_rem(right)?;
    if remainder != 0 && ((remainder < 0) != (right < 0)) {
        Some(remainder + right)
    } else {
        Some(remainder)
    }
}

/// Formats a value rounded to two decimals, folding negative zero into zero.
fn round_to_cents(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    if rounded == "-0.00" {
        String::from("0.00")
    } else {
        rounded
    }
}

/// # Errors
///
/// Returns an error when:
/// - `Division`, `IntDiv` or `Modulo` get a zero divisor
/// - the integer result does not fit into an `i64`
pub fn compute_result(left: i64, operator: Operator, right: i64) -> Result<Value, ExpressionError> {
    let divides = matches!(
        operator,
        Operator::Division | Operator::IntDiv | Operator::Modulo
    );
    if divides && right == 0 {
        debug!("Division by zero attempted: {} {} {}", left, operator, right);
        return Err(ExpressionError::DivisionByZero);
    }

    let result = match operator {
        Operator::Nothing => Some(Value::Integer(left)),
        Operator::Add => left.checked_add(right).map(Value::Integer),
        Operator::Subtract => left.checked_sub(right).map(Value::Integer),
        Operator::Multiply => left.checked_mul(right).map(Value::Integer),
        Operator::Division => Some(Value::Real(left as f64 / right as f64)),
        Operator::IntDiv => floor_div(left, right).map(Value::Integer),
        Operator::Modulo => floor_mod(left, right).map(Value::Integer),
    };

    result.ok_or_else(|| overflow(left, operator, right))
}

impl Expression {
    /// # Errors
    ///
    /// Fails when the expected result cannot be computed, see [`compute_result`].
    pub fn new(left: i64, operator: Operator, right: i64) -> Result<Self, ExpressionError> {
        let expected = compute_result(left, operator, right)?;
        debug!(
            "Built expression {} {} {} with expected result {:?}",
            left, operator, right, expected
        );
        Ok(Self {
            left,
            right,
            operator,
            expected,
            user_result: UserResult::Unanswered,
        })
    }

    /// Builds an expression from real operands, flooring both to integers.
    ///
    /// # Errors
    ///
    /// Fails on NaN or infinite operands, on operands outside the `i64` range,
    /// and on anything [`Expression::new`] rejects.
    pub fn from_f64(left: f64, operator: Operator, right: f64) -> Result<Self, ExpressionError> {
        let floor = |value: f64| -> Result<i64, ExpressionError> {
            if !value.is_finite() {
                return Err(ExpressionError::NonFiniteOperand(value));
            }
            let floored = value.floor();
            if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
                return Err(ExpressionError::OperandOutOfRange(value));
            }
            Ok(floored as i64)
        };

        Self::new(floor(left)?, operator, floor(right)?)
    }

    /// The placeholder recorded in place of a malformed turn
    pub fn sentinel() -> Self {
        Self {
            left: -1,
            right: -1,
            operator: Operator::Nothing,
            expected: Value::Integer(-1),
            user_result: UserResult::Unanswered,
        }
    }

    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn right(&self) -> i64 {
        self.right
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn expected(&self) -> Value {
        self.expected
    }

    pub fn user_result(&self) -> Option<f64> {
        match self.user_result {
            UserResult::Unanswered => None,
            UserResult::Answered(value) => Some(value),
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.user_result, UserResult::Answered(_))
    }

    /// Stores the user's answer unless one was already given.
    ///
    /// Returns `true` when the answer was stored.
    pub fn set_user_result(&mut self, value: f64) -> bool {
        match self.user_result {
            UserResult::Unanswered => {
                self.user_result = UserResult::Answered(value);
                true
            }
            UserResult::Answered(previous) => {
                warn!(
                    "Ignoring answer {} for '{}': already answered with {}",
                    value,
                    self.prompt(),
                    previous
                );
                false
            }
        }
    }

    /// Integral results must match exactly, real ones after rounding both
    /// sides to two decimals. Unanswered expressions are never correct.
    pub fn is_correct(&self) -> bool {
        let UserResult::Answered(user) = self.user_result else {
            return false;
        };

        match self.expected {
            Value::Integer(expected) => user == expected as f64,
            Value::Real(expected) => round_to_cents(user) == round_to_cents(expected),
        }
    }
}
