pub mod constants;
mod core;
mod errors;
mod number;

pub use core::Evaluator;
pub use errors::EvaluatorError;
pub use number::Number;
