use thiserror::Error;

use crate::expression::ExpressionError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Expression error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed before the number of games was given")]
    InputClosed,
}
