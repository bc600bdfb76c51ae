use log::debug;

/// Significant digits kept when snapping a scaled value back to the decimal
/// it most likely came from.
const SIGNIFICANT_DIGITS: usize = 15;

/// Round `value` to `precision` decimal places, half away from zero.
///
/// The scaled value is first cut to 15 significant digits, so a typed
/// decimal such as `1.005` (stored as `1.00499999...`) still rounds up.
/// When scaling would overflow (huge precision or huge value) the input is
/// returned untouched.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let exponent = i32::try_from(precision).unwrap_or(i32::MAX);
    let factor = 10_f64.powi(exponent);
    let scaled = value * factor;

    if !factor.is_finite() || !scaled.is_finite() {
        debug!(
            "Skipping rounding of {} to {} places: scaled value is not finite",
            value, precision
        );
        return value;
    }

    let snapped = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, scaled)
        .parse::<f64>()
        .unwrap_or(scaled);

    snapped.round() / factor
}
