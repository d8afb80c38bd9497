use log::debug;

use crate::generator::constants::{DIVISOR_REDUCTION, MULTIPLIER_REDUCTION};
use crate::operator::Operator;

/// Adjusts freshly drawn operands so the expression stays easy enough for
/// mental arithmetic.
///
/// - `Division` puts the larger operand first
/// - `Division`, `IntDiv` and `Modulo` halve the divisor, never below 1
/// - `Multiply` divides the second factor by 7, which may leave 0
///
/// Every other operator passes through unchanged.
pub fn smooth_operands(operator: Operator, left: i64, right: i64) -> (i64, i64) {
    let (mut left, mut right) = (left, right);

    if operator == Operator::Division && left < right {
        std::mem::swap(&mut left, &mut right);
    }

    match operator {
        Operator::Division | Operator::IntDiv | Operator::Modulo => {
            right = right.div_euclid(DIVISOR_REDUCTION);
            if right == 0 {
                right = 1;
            }
        }
        Operator::Multiply => right = right.div_euclid(MULTIPLIER_REDUCTION),
        Operator::Nothing | Operator::Add | Operator::Subtract => {}
    }

    debug!(
        "Smoothed operands for '{}' to ({}, {})",
        operator.name(),
        left,
        right
    );
    (left, right)
}
