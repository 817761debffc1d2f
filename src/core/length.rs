//! Parsing and formatting of the cut length ("boy").

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// Optional sign, digits with an optional fraction (or a bare fraction),
/// optional exponent. Applied after `,` has been replaced with `.`.
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid regex")
});

/// Round to 2 decimals, halves away from zero. Magnitudes where scaling
/// by 100 overflows carry no fractional part and are returned as is.
pub fn round2(v: f64) -> f64 {
    let scaled = v * 100.0;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / 100.0
}

/// Parse operator input into a length in meters, rounded to 2 decimals.
/// Both `.` and `,` are accepted as the decimal separator.
pub fn parse_length(input: &str) -> AppResult<f64> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(AppError::MissingLength);
    }

    let normalized = raw.replace(',', ".");
    if !DECIMAL_RE.is_match(&normalized) {
        return Err(AppError::InvalidLength(raw.to_string()));
    }

    let value: f64 = normalized
        .parse()
        .map_err(|_| AppError::InvalidLength(raw.to_string()))?;

    if !value.is_finite() {
        return Err(AppError::InvalidLength(raw.to_string()));
    }

    Ok(round2(value))
}

/// Fixed 2-decimal rendering used by the list, the form and the PDF export.
pub fn format_length(v: f64) -> String {
    format!("{:.2}", v)
}
