//!
//! Lenient accessors for untrusted JSON values.
//!
//! Every accessor degrades a missing, mistyped, negative, or non-finite
//! field to its default instead of failing.
//!

use serde_json::Map;
use serde_json::Value;

///
/// Reads a non-negative finite float, defaulting to `0.0`.
///
pub fn non_negative_f64(value: Option<&Value>) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(number) if number.is_finite() && number >= 0.0 => number,
        _ => 0.0,
    }
}

///
/// Reads a non-negative integer, defaulting to `0`.
/// Non-negative floats are truncated.
///
pub fn non_negative_u64(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(number)) => match number.as_u64() {
            Some(number) => number,
            None => match number.as_f64() {
                Some(number) if number.is_finite() && number >= 0.0 => number as u64,
                _ => 0,
            },
        },
        _ => 0,
    }
}

///
/// Reads a boolean, defaulting to `false`.
///
pub fn boolean(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or_default()
}

///
/// Reads a string, if the value is one.
///
pub fn string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

///
/// Reads an array of strings, skipping the elements that are not strings.
///
pub fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|array| {
            array
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

///
/// Returns the nested object under `key`, if there is one.
///
pub fn object<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key).and_then(Value::as_object)
}
