//! Text-level stages: whitespace sanitizing, character/parenthesis
//! validation, and result rounding.

mod errors;
mod rounding;
mod sanitize;
mod validation;

pub use errors::ValidationError;
pub use rounding::round_to_precision;
pub use sanitize::sanitize_expression;
pub use validation::{is_allowed_char, validate_expression};
