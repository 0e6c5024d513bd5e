//! Input Sanitization
//!
//! Numeric guards used at the API boundary. The core favors total
//! functions: out-of-domain input is clamped here rather than rejected.

/// Clamp to the unit interval; NaN and infinities become 0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Clamp a percent value to 0-100.
pub fn clamp_percent(value: u8) -> u8 {
    value.min(100)
}

/// Coerce to a non-negative finite value; NaN, infinities and negatives become 0.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Ratio of `numerator` to `denominator` with a division-by-zero guard.
///
/// A non-positive or non-finite denominator yields 1.0 (neutral ratio).
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator.is_finite() && denominator > 0.0 {
        non_negative(numerator) / denominator
    } else {
        1.0
    }
}
