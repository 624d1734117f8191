//! Narrowing of untyped wire values into attribute kinds.
//!
//! Every conversion is total. A value of the wrong shape becomes the zero
//! value of the target kind:
//!
//! | Target | Accepted | Fallback |
//! |--------|----------|----------|
//! | string | any value, rendered as text | `""` for null |
//! | bool | JSON boolean | `false` |
//! | int64 | JSON number, truncated toward zero | `0` |
//! | float64 | JSON number | `0.0` |
//! | set-of-string | JSON array, elements rendered as text | empty set |
//! | set-of-int64 | JSON array, numeric elements truncated | empty set |

use serde_json::Value as Json;

use crate::model::Set;

/// Renders a wire value as text.
///
/// Integral numbers print without a fraction (`50`, not `50.0`), so a number
/// that went through a float keeps the spelling the user wrote.
pub fn to_text(json: &Json) -> String {
    match json {
        Json::Null => String::new(),
        Json::Bool(b) => b.to_string(),
        Json::String(s) => s.clone(),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // as_f64 never fails for a number without arbitrary_precision
                let f = n.as_f64().unwrap_or_default();
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            }
        }
        Json::Array(_) | Json::Object(_) => json.to_string(),
    }
}

/// Narrows a wire value to a boolean.
pub fn to_bool(json: &Json) -> Option<bool> {
    json.as_bool()
}

/// Narrows a wire value to a float.
pub fn to_f64(json: &Json) -> Option<f64> {
    json.as_f64()
}

/// Narrows a wire value to an integer by truncating its float reading.
///
/// Out-of-range values saturate at the `i64` bounds.
pub fn to_i64(json: &Json) -> Option<i64> {
    json.as_f64().map(|f| f.trunc() as i64)
}

/// Narrows a wire array to a set of strings.
pub fn to_string_set(json: &Json) -> Option<Set<String>> {
    json.as_array()
        .map(|items| items.iter().map(to_text).collect())
}

/// Narrows a wire array to a set of integers, skipping non-numeric elements.
pub fn to_i64_set(json: &Json) -> Option<Set<i64>> {
    json.as_array()
        .map(|items| items.iter().filter_map(to_i64).collect())
}
