use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("Unknown operator: '{0}'")]
    Unknown(String),
}
