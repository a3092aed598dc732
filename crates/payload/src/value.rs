//! Lenient coercions of JSON values.
//!
//! Payload values come from pandas frames and may be numbers, numeric strings
//! or nulls. The coercions below follow what a browser would do with them.

use serde_json::Value;

/// Reads a value as a number.
///
/// Numbers and numeric strings yield `Some`; nulls, booleans, non-numeric
/// strings, arrays and objects yield `None`.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text.trim()),
        _ => None,
    }
}

// Rust also reads `inf`, `infinity` and `NaN`; a browser only knows `Infinity`.
fn parse_number(text: &str) -> Option<f64> {
    let number = text.parse::<f64>().ok()?;
    if number.is_finite() || text.trim_start_matches(['+', '-']) == "Infinity" {
        Some(number)
    } else {
        None
    }
}

/// Reports whether a value is truthy by JavaScript rules.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Rounds to the nearest integer the way `Math.round` does, halves toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
