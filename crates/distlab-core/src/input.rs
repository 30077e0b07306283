//! Coercion of raw text input
//!
//! Text typed into a count or measurement field becomes a number here and
//! nowhere else. Parsing takes the longest numeric prefix, so `"12 pens"`
//! reads as 12. Text with no numeric prefix, and anything non-finite,
//! becomes 0; NaN never reaches the engines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading integer for count fields
    static ref INTEGER_PREFIX: Regex = Regex::new(r"^[+-]?\d+").unwrap();

    /// Leading decimal with optional exponent for measurement fields
    static ref DECIMAL_PREFIX: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
}

/// Parse a count field
///
/// Fractions are truncated (`"3.7"` is 3) and negative counts clamp to 0.
/// Integers too large for `u32` saturate.
pub fn coerce_count(raw: &str) -> u32 {
    let text = raw.trim();
    let Some(found) = INTEGER_PREFIX.find(text) else {
        log_discarded("count", raw);
        return 0;
    };

    let digits = found.as_str();
    if digits.starts_with('-') {
        return 0;
    }
    digits
        .trim_start_matches('+')
        .parse::<u32>()
        .unwrap_or(u32::MAX)
}

/// Parse a measurement field
pub fn coerce_measurement(raw: &str) -> f64 {
    let text = raw.trim();
    let Some(found) = DECIMAL_PREFIX.find(text) else {
        log_discarded("measurement", raw);
        return 0.0;
    };

    match found.as_str().parse::<f64>() {
        // -0.0 would display as "-0.00"
        Ok(value) if value == 0.0 => 0.0,
        Ok(value) if value.is_finite() => value,
        _ => {
            log_discarded("measurement", raw);
            0.0
        }
    }
}

fn log_discarded(field: &str, raw: &str) {
    if !raw.trim().is_empty() {
        tracing::warn!("Unparseable {} input {:?}, using 0", field, raw);
    }
}
