use std::str::FromStr;

use log::debug;

use crate::operator::ast::Operator;
use crate::operator::errors::OperatorError;

impl FromStr for Operator {
    type Err = OperatorError;

    /// Accepts either the operator's name (case-insensitive) or its glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let found = Operator::ALL
            .into_iter()
            .filter(|op| !op.is_no_op())
            .find(|op| op.glyph() == text || op.name().eq_ignore_ascii_case(text));

        match found {
            Some(op) => {
                debug!("Parsed operator '{}' as {:?}", text, op);
                Ok(op)
            }
            None if text.eq_ignore_ascii_case(Operator::Nothing.name()) => Ok(Operator::Nothing),
            None => Err(OperatorError::Unknown(text.to_string())),
        }
    }
}
