//! Token-level stages: tokenizer, Shunting-Yard conversion and postfix
//! evaluation.

mod display;
mod errors;
mod eval;
mod operator;
mod postfix;
mod token;
mod tokenizer;

pub use display::format_postfix;
pub use errors::ExpressionError;
pub use eval::evaluate_postfix;
pub use operator::{Associativity, Operator, should_pop};
pub use postfix::to_postfix;
pub use token::Token;
pub use tokenizer::tokenize;

#[cfg(test)]
mod tests;
