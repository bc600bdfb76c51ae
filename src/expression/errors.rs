use thiserror::Error;

use crate::expression::operator::Operator;

/// Errors raised while tokenizing or reducing a postfix sequence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Operator '{0}' requires two operands")]
    InsufficientOperands(Operator),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid expression: {remaining} value(s) left on the operand stack")]
    InvalidExpression { remaining: usize },
}
