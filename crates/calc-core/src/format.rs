//! Display formatting — the single numeric-to-text conversion point
//!
//! Guarantees:
//! - Idempotent: formatting the re-parsed output yields the same text
//! - Bounded: at most `DISPLAY_PRECISION` significant digits

use crate::constants::{DISPLAY_PRECISION, ERROR_DISPLAY};

/// Round to `digits` significant digits via an exponential round-trip
fn round_significant(value: f64, digits: usize) -> f64 {
    format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}

/// Format a number for display.
///
/// - Non-finite values render as the error sentinel.
/// - Magnitudes below 1e-10 use exponential notation with
///   `DISPLAY_PRECISION - 1` fractional digits.
/// - Everything else is rounded to `DISPLAY_PRECISION` significant
///   digits and rendered as the shortest decimal; integral results
///   carry no decimal point.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    // Collapses -0.0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    if value.abs() < 1e-10 {
        return format!("{:.*e}", DISPLAY_PRECISION - 1, value);
    }

    let rounded = round_significant(value, DISPLAY_PRECISION);
    format!("{}", rounded)
}
