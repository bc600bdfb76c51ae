use std::fmt;

use crate::evaluator::constants::{I64_LOWER_BOUND, I64_UPPER_BOUND};

/// A rounded evaluation result.
///
/// Whole values that fit in an `i64` are reported as [`Number::Integer`];
/// everything else, including infinities and NaN, stays a [`Number::Float`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Normalize an already-rounded value.
    pub fn from_rounded(value: f64) -> Self {
        if value.is_finite()
            && value.fract() == 0.0
            && (I64_LOWER_BOUND..I64_UPPER_BOUND).contains(&value)
        {
            // In range and whole, so the cast is exact. Also folds -0.0 into 0.
            Number::Integer(value as i64)
        } else {
            Number::Float(value)
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.as_f64()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}
