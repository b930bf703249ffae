//! Forgiving field deserializers for request DTOs.
//!
//! Request bodies never fail on a wrong-typed field: strings fall back to
//! empty and counts to zero, so the handler decides what a value means.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A JSON number that is mathematically an integer, as `i64`.
///
/// `1` and `1.0` both give `Some(1)`; `1.5`, `"1"`, `null` give `None`.
/// Integers above `i64::MAX` saturate.
pub fn integral(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.as_u64().is_some() {
        return Some(i64::MAX);
    }
    let f = number.as_f64()?;
    if f.fract() != 0.0 || !f.is_finite() {
        return None;
    }
    if f >= i64::MAX as f64 {
        Some(i64::MAX)
    } else if f <= i64::MIN as f64 {
        Some(i64::MIN)
    } else {
        Some(f as i64)
    }
}

/// A string field; anything that is not a JSON string becomes `""`.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// A non-negative count; anything else becomes `0`.
///
/// Counts beyond `u32` saturate so the episode limit still rejects them.
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match integral(&value) {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 0,
    })
}
