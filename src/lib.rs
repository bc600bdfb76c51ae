//! Safecalc - a safe arithmetic expression evaluator
//!
//! Expressions are limited to literal decimal numbers, the binary operators
//! `+ - * / ^` and parentheses. Text goes through a fixed pipeline
//! (sanitize, validate, tokenize, Shunting-Yard, postfix evaluation, rounding)
//! and nothing in it can execute code.

pub mod evaluator;
pub mod expression;
pub mod utils;

use log::debug;

// Re-export the main public API
pub use evaluator::{Evaluator, EvaluatorError, Number};
pub use expression::{ExpressionError, Operator, Token};
pub use utils::ValidationError;

/// Evaluate an expression rounded to `precision` decimal places
///
/// This is a convenience function that builds a one-off [`Evaluator`].
///
/// # Errors
///
/// Returns an error if the expression is empty, contains anything other than
/// digits, `.`, `+ - * / ^` and parentheses, has unequal parenthesis counts,
/// is structurally malformed, or divides by zero.
///
/// # Examples
///
/// ```
/// use safecalc::{Number, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4", 2), Ok(Number::Integer(14)));
/// assert_eq!(evaluate("3.14 * 2", 2), Ok(Number::Float(6.28)));
/// assert!(evaluate("5 / 0", 2).is_err());
/// ```
pub fn evaluate(expression: &str, precision: i32) -> Result<Number, EvaluatorError> {
    Evaluator::new(precision).evaluate(expression)
}

/// Evaluate an expression, returning `None` on any failure
///
/// The failure message is logged at `debug` level. Uses the default
/// precision of 2 when `precision` is `None`.
///
/// # Examples
///
/// ```
/// use safecalc::{Number, calculate};
///
/// assert_eq!(calculate("(10 + 5) / 3", None), Some(Number::Integer(5)));
/// assert_eq!(calculate("10 / 3", Some(1)), Some(Number::Float(3.3)));
/// assert_eq!(calculate("2 + a", None), None);
/// ```
pub fn calculate(expression: &str, precision: Option<i32>) -> Option<Number> {
    let evaluator = precision.map_or_else(Evaluator::default, Evaluator::new);

    match evaluator.evaluate(expression) {
        Ok(number) => Some(number),
        Err(e) => {
            debug!("Calculation of '{}' failed: {}", expression, e);
            None
        }
    }
}
