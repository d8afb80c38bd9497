// Operand ranges for generated expressions
pub const LEFT_MIN: i64 = 0;
pub const LEFT_MAX: i64 = 50;
pub const RIGHT_MIN: i64 = 1;
pub const RIGHT_MAX: i64 = 50;

// Divisor halving for the division-like operators
pub const DIVISOR_REDUCTION: i64 = 2;
// Multiplier reduction for multiplication
pub const MULTIPLIER_REDUCTION: i64 = 7;
