//! Unit formatting
//!
//! Every numeric design token that ends up in CSS passes through [`px`]. Token
//! accessors never append units themselves, so a value is converted exactly once.

use crate::css::CssValue;

/// Decimal places kept when printing numbers into CSS.
const PRECISION: f32 = 1000.0;

/// Magnitude from which every `f32` is a whole number.
const WHOLE_ONLY: f32 = 8_388_608.0;

/// Format a number for CSS output.
///
/// Rounds to three decimal places and drops a trailing `.0`, so `8.0` prints as
/// `8` and `0.30000001` as `0.3`. Large values print in full decimal notation.
/// NaN and infinities are not valid CSS numbers and print as `0`.
pub fn format_number(value: f32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = if value.abs() >= WHOLE_ONLY {
        value
    } else {
        (value * PRECISION).round() / PRECISION
    };
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Convert a pixel quantity into a CSS length value (`8.0` -> `"8px"`).
pub fn px(value: f32) -> CssValue {
    CssValue::Str(px_string(value))
}

/// Same as [`px`] but returns the raw string, for composing shorthands.
pub fn px_string(value: f32) -> String {
    format!("{}px", format_number(value))
}
