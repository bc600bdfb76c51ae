// Configuration constants for the evaluator module
pub const DEFAULT_PRECISION: u32 = 2;

/// Smallest and one-past-largest `f64` values that convert to `i64` exactly.
pub const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;
pub const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
