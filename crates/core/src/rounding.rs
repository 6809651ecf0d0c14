//! Decimal rounding for reported figures.

/// Round `value` to `places` decimal places (half away from zero).
///
/// Non-finite inputs are returned unchanged.
pub fn round_dp(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
