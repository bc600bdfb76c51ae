use std::iter::Peekable;
use std::str::CharIndices;

use log::debug;

use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::expression::token::Token;

/// Advance over a run of ASCII digits, returning the byte offset one past
/// the last digit consumed (or `end` if there were none).
fn consume_digits(chars: &mut Peekable<CharIndices<'_>>, mut end: usize) -> usize {
    while let Some(&(i, c)) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        end = i + c.len_utf8();
        chars.next();
    }
    end
}

/// Split validated expression text into tokens.
///
/// Number literals are a maximal digit run, optionally followed by `.` and
/// more digits, so `3.` is read as `3`. Any other character that is not an
/// operator or parenthesis is skipped; callers are expected to have run
/// [`crate::utils::validate_expression`] first.
///
/// # Errors
///
/// Returns [`ExpressionError::InvalidExpression`] if a number literal cannot
/// be converted to `f64`.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = expression.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            let mut end = consume_digits(&mut chars, start + 1);
            if let Some(&(dot, '.')) = chars.peek() {
                chars.next();
                end = consume_digits(&mut chars, dot + 1);
            }

            let lexeme = expression
                .get(start..end)
                .ok_or(ExpressionError::InvalidExpression { remaining: 0 })?;
            let value = lexeme.parse::<f64>().map_err(|_| {
                debug!("Number literal '{}' could not be parsed", lexeme);
                ExpressionError::InvalidExpression { remaining: 0 }
            })?;
            tokens.push(Token::Number(value));
            continue;
        }

        match c {
            '(' => tokens.push(Token::LeftParen),
            ')' => tokens.push(Token::RightParen),
            _ => match Operator::from_symbol(c) {
                Some(op) => tokens.push(Token::Operator(op)),
                None => debug!("Skipping unmatched character '{}' at offset {}", c, start),
            },
        }
    }

    debug!("Tokenized '{}' into {} tokens", expression, tokens.len());
    Ok(tokens)
}
