use log::debug;

use crate::expression::display::format_postfix;
use crate::expression::operator::should_pop;
use crate::expression::token::Token;

/// Reorder infix tokens into postfix form (Shunting-Yard).
///
/// A `)` with no matching `(` is dropped here rather than reported; the
/// leftover operands make the postfix evaluator fail instead.
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                let mut matched = false;
                while let Some(top) = stack.pop() {
                    if top == Token::LeftParen {
                        matched = true;
                        break;
                    }
                    output.push(top);
                }
                if !matched {
                    debug!("Closing parenthesis without a matching opening one");
                }
            }
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if !should_pop(op, top) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    debug!("Postfix form: {}", format_postfix(&output));
    output
}
