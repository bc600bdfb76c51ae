use log::{debug, warn};

use crate::utils::errors::ValidationError;

/// Strip ASCII whitespace from the raw input. Other Unicode spaces (such as
/// U+00A0) are kept and rejected by validation.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyExpression`] if nothing is left afterwards.
pub fn sanitize_expression(raw: &str) -> Result<String, ValidationError> {
    debug!("Sanitizing expression: '{}'", raw);

    let sanitized: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    if sanitized.is_empty() {
        warn!("Expression is empty after whitespace removal");
        return Err(ValidationError::EmptyExpression);
    }

    debug!("Sanitized expression: '{}'", sanitized);
    Ok(sanitized)
}
