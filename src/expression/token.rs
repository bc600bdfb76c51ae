use crate::expression::operator::Operator;

/// A lexical unit of an arithmetic expression, in source order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}
