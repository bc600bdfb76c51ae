use log::{debug, warn};

use crate::utils::errors::ValidationError;

/// Characters an expression may contain once whitespace is gone.
#[inline]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

/// Only the counts of `(` and `)` are compared here. Misordered groups such
/// as `)(` get through and are reported later by the postfix evaluator.
///
/// # Errors
///
/// Returns an error if the text contains a character outside the arithmetic
/// whitelist, or if the parenthesis counts differ.
pub fn validate_expression(expression: &str) -> Result<(), ValidationError> {
    debug!("Validating expression: '{}'", expression);

    let rejected: String = expression.chars().filter(|c| !is_allowed_char(*c)).collect();
    if !rejected.is_empty() {
        warn!(
            "Expression '{}' contains invalid characters: '{}'",
            expression, rejected
        );
        return Err(ValidationError::InvalidCharacters(rejected));
    }

    let open = expression.chars().filter(|&c| c == '(').count();
    let close = expression.chars().filter(|&c| c == ')').count();
    if open != close {
        warn!(
            "Parenthesis count mismatch in '{}': {} opening, {} closing",
            expression, open, close
        );
        return Err(ValidationError::MismatchedParentheses { open, close });
    }

    debug!("Expression validation successful");
    Ok(())
}
