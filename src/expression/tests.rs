use crate::expression::{
    ExpressionError, Operator, Token, evaluate_postfix, format_postfix, to_postfix, tokenize,
};

fn postfix_of(expression: &str) -> String {
    match tokenize(expression) {
        Ok(tokens) => format_postfix(&to_postfix(&tokens)),
        Err(e) => format!("error: {}", e),
    }
}

fn eval(expression: &str) -> Result<f64, ExpressionError> {
    let tokens = tokenize(expression)?;
    evaluate_postfix(&to_postfix(&tokens))
}

#[test]
fn test_tokenize_numbers_and_operators() {
    let tokens = tokenize("12+3.5*(4-1)");
    assert_eq!(
        tokens,
        Ok(vec![
            Token::Number(12.0),
            Token::Operator(Operator::Add),
            Token::Number(3.5),
            Token::Operator(Operator::Mul),
            Token::LeftParen,
            Token::Number(4.0),
            Token::Operator(Operator::Sub),
            Token::Number(1.0),
            Token::RightParen,
        ])
    );
}

#[test]
fn test_tokenize_trailing_dot() {
    assert_eq!(tokenize("3."), Ok(vec![Token::Number(3.0)]));
    assert_eq!(
        tokenize("3.*2"),
        Ok(vec![
            Token::Number(3.0),
            Token::Operator(Operator::Mul),
            Token::Number(2.0),
        ])
    );
}

#[test]
fn test_tokenize_skips_stray_dots() {
    // A leading dot is not part of any number literal
    assert_eq!(tokenize(".5"), Ok(vec![Token::Number(5.0)]));
    // The second dot starts a new scan, splitting the literal in two
    assert_eq!(
        tokenize("1.2.3"),
        Ok(vec![Token::Number(1.2), Token::Number(3.0)])
    );
}

#[test]
fn test_tokenize_long_digit_run() {
    let digits = "9".repeat(400);
    let result = tokenize(&digits);
    assert!(matches!(result.as_deref(), Ok([Token::Number(n)]) if n.is_infinite()));
}

#[test]
fn test_postfix_precedence() {
    assert_eq!(postfix_of("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_of("2*3+4"), "2 3 * 4 +");
}

#[test]
fn test_postfix_left_associative() {
    assert_eq!(postfix_of("10-4-3"), "10 4 - 3 -");
    assert_eq!(postfix_of("8/4/2"), "8 4 / 2 /");
}

#[test]
fn test_postfix_right_associative_pow() {
    assert_eq!(postfix_of("2^3^2"), "2 3 2 ^ ^");
}

#[test]
fn test_postfix_parentheses() {
    assert_eq!(postfix_of("(10+5)/3"), "10 5 + 3 /");
    assert_eq!(postfix_of("2*(3+4)^2"), "2 3 4 + 2 ^ *");
}

#[test]
fn test_postfix_unmatched_closing_parenthesis_is_dropped() {
    assert_eq!(postfix_of("2)+3"), "2 3 +");
}

#[test]
fn test_postfix_leftover_opening_parenthesis_is_emitted() {
    assert_eq!(postfix_of(")("), "(");
}

#[test]
fn test_evaluate_basic() {
    assert_eq!(eval("2+3*4"), Ok(14.0));
    assert_eq!(eval("(10+5)/3"), Ok(5.0));
    assert_eq!(eval("2^3^2"), Ok(512.0));
    assert_eq!(eval("(2^3)^2"), Ok(64.0));
    assert_eq!(eval("10-4-3"), Ok(3.0));
    assert_eq!(eval("8/4/2"), Ok(1.0));
}

#[test]
fn test_evaluate_decimal() {
    let result = eval("3.14*2");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 6.28).abs() < 1e-9);
    }
}

#[test]
fn test_evaluate_division_by_zero() {
    assert_eq!(eval("5/0"), Err(ExpressionError::DivisionByZero));
    assert_eq!(eval("5/(2-2)"), Err(ExpressionError::DivisionByZero));
    assert_eq!(eval("1/0.0"), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_evaluate_insufficient_operands() {
    assert_eq!(
        eval("2+"),
        Err(ExpressionError::InsufficientOperands(Operator::Add))
    );
    // No unary minus
    assert_eq!(
        eval("-5"),
        Err(ExpressionError::InsufficientOperands(Operator::Sub))
    );
    assert_eq!(
        eval("*"),
        Err(ExpressionError::InsufficientOperands(Operator::Mul))
    );
}

#[test]
fn test_evaluate_leftover_operands() {
    assert_eq!(
        eval("1.2.3"),
        Err(ExpressionError::InvalidExpression { remaining: 2 })
    );
    assert_eq!(
        eval("(2)(3)"),
        Err(ExpressionError::InvalidExpression { remaining: 2 })
    );
    assert_eq!(
        eval("1(2)3"),
        Err(ExpressionError::InvalidExpression { remaining: 3 })
    );
}

#[test]
fn test_evaluate_misordered_parentheses() {
    assert_eq!(
        eval(")("),
        Err(ExpressionError::InvalidExpression { remaining: 0 })
    );
    assert_eq!(
        eval("2)+(3"),
        Err(ExpressionError::InvalidExpression { remaining: 2 })
    );
}

#[test]
fn test_evaluate_empty_postfix() {
    assert_eq!(
        eval("()"),
        Err(ExpressionError::InvalidExpression { remaining: 0 })
    );
    assert_eq!(
        evaluate_postfix(&[]),
        Err(ExpressionError::InvalidExpression { remaining: 0 })
    );
}

#[test]
fn test_evaluate_non_finite_results_pass_through() {
    let result = eval("10^400");
    assert!(matches!(result, Ok(v) if v.is_infinite()));

    let result = eval("(1-9)^0.5");
    assert!(matches!(result, Ok(v) if v.is_nan()));
}

#[test]
fn test_token_display() {
    assert_eq!(Token::Number(3.5).to_string(), "3.5");
    assert_eq!(Token::Number(4.0).to_string(), "4");
    assert_eq!(Token::Operator(Operator::Pow).to_string(), "^");
    assert_eq!(Token::LeftParen.to_string(), "(");
    assert_eq!(Token::RightParen.to_string(), ")");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ExpressionError::InsufficientOperands(Operator::Div).to_string(),
        "Operator '/' requires two operands"
    );
    assert_eq!(
        ExpressionError::DivisionByZero.to_string(),
        "Division by zero"
    );
    assert_eq!(
        ExpressionError::InvalidExpression { remaining: 2 }.to_string(),
        "Invalid expression: 2 value(s) left on the operand stack"
    );
}
