//! Locale-style amount rendering for input fields and suggestion chips.

use crate::config::DisplayConfig;

/// Fraction digits kept when rendering
const MAX_FRACTION_DIGITS: usize = 3;

/// `10^MAX_FRACTION_DIGITS`
const FRACTION_SCALE: f64 = 1_000.0;

/// Render an amount with grouped thousands, e.g. `1234567.5` → `1.234.567,5`.
///
/// Anything that rounds to zero renders as an empty string so a cleared
/// field shows its placeholder. The last kept digit rounds half away from
/// zero and trailing fraction zeros are dropped.
pub fn format_amount(value: f64, config: &DisplayConfig) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = round_fraction(value.abs());
    if magnitude == 0.0 {
        return String::new();
    }

    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, magnitude);
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rendered.len() + integer.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(integer, &config.group_separator));
    if !fraction.is_empty() {
        out.push_str(&config.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Round a non-negative value to the kept fraction digits, ties upward.
fn round_fraction(magnitude: f64) -> f64 {
    let scaled = magnitude * FRACTION_SCALE;
    if scaled.is_finite() { scaled.round() / FRACTION_SCALE } else { magnitude }
}

/// Insert `separator` between every three digits counted from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
