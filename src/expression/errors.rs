use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow while evaluating {left} {operator} {right}")]
    Overflow {
        left: i64,
        operator: String,
        right: i64,
    },
    #[error("Operand does not fit into a 64-bit integer: {0}")]
    OperandOutOfRange(f64),
    #[error("Operand is not a finite number: {0}")]
    NonFiniteOperand(f64),
}
