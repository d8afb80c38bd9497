//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, UserResult, Value};
pub use display::ReportMarkers;
pub use errors::ExpressionError;
pub use eval::compute_result;
