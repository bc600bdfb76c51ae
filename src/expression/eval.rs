use log::debug;

use crate::expression::errors::ExpressionError;
use crate::expression::token::Token;

/// Reduce a postfix token sequence to a single value with an operand stack.
///
/// # Errors
///
/// Returns an error when:
/// - an operator finds fewer than two operands on the stack
/// - `/` is applied with a zero right operand
/// - a parenthesis is left in the sequence, or the stack does not end with
///   exactly one value
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, ExpressionError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Number(value) => stack.push(value),
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    debug!("Operator '{}' is missing an operand", op);
                    return Err(ExpressionError::InsufficientOperands(op));
                };
                let value = op.apply(left, right)?;
                debug!("{} {} {} = {}", left, op, right, value);
                stack.push(value);
            }
            Token::LeftParen | Token::RightParen => {
                debug!("Unbalanced parenthesis left in postfix sequence");
                return Err(ExpressionError::InvalidExpression {
                    remaining: stack.len(),
                });
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => {
            debug!(
                "Postfix evaluation ended with {} values on the stack",
                rest.len()
            );
            Err(ExpressionError::InvalidExpression {
                remaining: rest.len(),
            })
        }
    }
}
