use log::{debug, info};
use rayon::prelude::*;

use crate::evaluator::constants::DEFAULT_PRECISION;
use crate::evaluator::errors::EvaluatorError;
use crate::evaluator::number::Number;
use crate::expression::{Token, evaluate_postfix, format_postfix, to_postfix, tokenize};
use crate::utils::{round_to_precision, sanitize_expression, validate_expression};

/// Evaluates arithmetic expressions over literal decimal numbers.
///
/// The only state is the rounding precision, fixed at construction, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    precision: u32,
}

impl Evaluator {
    /// Create an evaluator rounding to `precision` decimal places. Negative
    /// values are clamped to 0.
    pub fn new(precision: i32) -> Self {
        Self {
            precision: u32::try_from(precision).unwrap_or(0),
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Sanitize, validate, tokenize and convert `expression` to postfix form.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is empty, contains characters
    /// other than digits, `.`, operators and parentheses, or has unequal
    /// parenthesis counts.
    pub fn to_postfix(&self, expression: &str) -> Result<Vec<Token>, EvaluatorError> {
        let sanitized = sanitize_expression(expression)?;
        validate_expression(&sanitized)?;
        let tokens = tokenize(&sanitized)?;
        Ok(to_postfix(&tokens))
    }

    /// Evaluate `expression` and round the result to this evaluator's
    /// precision.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The expression is empty after whitespace removal
    /// * It contains characters outside the arithmetic whitelist
    /// * The parenthesis counts differ
    /// * An operator is missing an operand
    /// * A division by zero is attempted
    /// * The expression does not reduce to exactly one value
    pub fn evaluate(&self, expression: &str) -> Result<Number, EvaluatorError> {
        debug!("Evaluating expression: '{}'", expression);

        let postfix = self.to_postfix(expression)?;
        let raw = evaluate_postfix(&postfix)?;
        let number = Number::from_rounded(round_to_precision(raw, self.precision));

        debug!(
            "'{}' -> [{}] -> {} (rounded to {} places: {})",
            expression,
            format_postfix(&postfix),
            raw,
            self.precision,
            number
        );
        Ok(number)
    }

    /// Evaluate independent expressions in parallel. Results keep the order
    /// of `expressions`.
    pub fn evaluate_all<S>(&self, expressions: &[S]) -> Vec<Result<Number, EvaluatorError>>
    where
        S: AsRef<str> + Sync,
    {
        info!("Evaluating {} expressions in parallel", expressions.len());

        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}
