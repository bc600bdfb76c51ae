use thiserror::Error;

/// Errors raised while sanitizing or validating raw expression text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Expression cannot be empty")]
    EmptyExpression,
    #[error("Expression contains invalid characters: {0}")]
    InvalidCharacters(String),
    #[error("Mismatched parentheses: {open} opening, {close} closing")]
    MismatchedParentheses { open: usize, close: usize },
}
