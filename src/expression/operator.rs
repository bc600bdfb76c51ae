use log::debug;

use crate::expression::errors::ExpressionError;

/// Grouping direction for operators of equal precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// The five binary operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub const fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    pub const fn associativity(self) -> Associativity {
        match self {
            Operator::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Compute `left OP right`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] for `/` with a zero
    /// right operand.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right == 0.0 {
                    debug!("Division by zero attempted: {} / {}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Pow => Ok(left.powf(right)),
        }
    }
}

/// Whether `top` (already on the operator stack) must be moved to the output
/// before `incoming` is pushed.
#[inline]
pub fn should_pop(incoming: Operator, top: Operator) -> bool {
    match incoming.associativity() {
        Associativity::Left => incoming.precedence() <= top.precedence(),
        Associativity::Right => incoming.precedence() < top.precedence(),
    }
}
