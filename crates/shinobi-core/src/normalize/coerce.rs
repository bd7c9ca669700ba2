//! Lenient scalar coercions over `serde_json::Value`.
//!
//! Each helper returns `None` when the value cannot be read as the target
//! shape; callers decide the default.

use serde_json::{Map, Value};

use crate::model::LabelMap;

/// Non-negative integer from a JSON number or numeric string.
pub(crate) fn count(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(integral_non_negative)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_non_negative))
        }
        _ => None,
    }
}

/// Same as [`count`] but saturated into `u32`.
pub(crate) fn count_u32(v: &Value) -> Option<u32> {
    count(v).map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

fn integral_non_negative(f: f64) -> Option<u64> {
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Signed integer id from a JSON number or numeric string.
pub(crate) fn id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Text from a string, number or boolean.
pub(crate) fn text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// String list from an array (non-text elements dropped) or a lone string.
pub(crate) fn text_list(v: &Value) -> Option<Vec<String>> {
    match v {
        Value::Array(items) => Some(items.iter().filter_map(text).collect()),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

/// Ordered label map from an object; entries with non-text values dropped.
pub(crate) fn label_map(v: &Value) -> Option<LabelMap> {
    let obj = v.as_object()?;
    Some(
        obj.iter()
            .filter_map(|(k, v)| text(v).map(|t| (k.clone(), t)))
            .collect(),
    )
}

/// Looks up `key` and applies `f`, treating `null` as absent.
pub(crate) fn field<T>(obj: &Map<String, Value>, key: &str, f: impl Fn(&Value) -> Option<T>) -> Option<T> {
    obj.get(key).filter(|v| !v.is_null()).and_then(f)
}

/// First key in `keys` whose value is present and coerces with `f`.
pub(crate) fn first_of<T>(
    obj: &Map<String, Value>,
    keys: &[&str],
    f: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    keys.iter().find_map(|k| field(obj, k, &f))
}
