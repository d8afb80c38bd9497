use crate::operator::Operator;

/// The correct result of an expression.
///
/// Integer operators produce `Integer`; true division produces `Real` even
/// when the quotient happens to be whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Real(x) => x,
        }
    }

    pub fn is_integral(self) -> bool {
        matches!(self, Value::Integer(_))
    }
}

/// The user's answer; moves from `Unanswered` to `Answered` at most once
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserResult {
    Unanswered,
    Answered(f64),
}

/// A binary arithmetic expression with its expected result and the user's answer
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub(crate) left: i64,
    pub(crate) right: i64,
    pub(crate) operator: Operator,
    pub(crate) expected: Value,
    pub(crate) user_result: UserResult,
}
