//! Randomised expression generation with difficulty smoothing

pub mod constants;
mod core;
mod smoothing;

pub use self::core::ExpressionGenerator;
pub use smoothing::smooth_operands;
