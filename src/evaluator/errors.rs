use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::ValidationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("Invalid expression text: {0}")]
    Validation(#[from] ValidationError),
    #[error("Expression evaluation error: {0}")]
    Expression(#[from] ExpressionError),
}
