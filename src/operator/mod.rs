//! Operator module split into submodules

mod ast;
mod errors;
mod parse;

pub use ast::{Operator, list_operators};
pub use errors::OperatorError;
