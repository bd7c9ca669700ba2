//! Display formatting for optional character fields.

use crate::model::{Debut, LabelMap};

/// Placeholder for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// A field that can be rendered as one line of text.
pub trait FieldValue {
    /// Text for this value, or `fallback` when it is absent or empty.
    fn format_or(&self, fallback: &str) -> String;

    fn format(&self) -> String {
        self.format_or(NOT_AVAILABLE)
    }
}

impl FieldValue for str {
    fn format_or(&self, fallback: &str) -> String {
        if self.is_empty() {
            fallback.to_string()
        } else {
            self.to_string()
        }
    }
}

impl FieldValue for String {
    fn format_or(&self, fallback: &str) -> String {
        self.as_str().format_or(fallback)
    }
}

impl FieldValue for i64 {
    fn format_or(&self, _fallback: &str) -> String {
        self.to_string()
    }
}

/// Items joined with `", "`.
impl FieldValue for [String] {
    fn format_or(&self, fallback: &str) -> String {
        if self.is_empty() {
            fallback.to_string()
        } else {
            self.join(", ")
        }
    }
}

impl FieldValue for Vec<String> {
    fn format_or(&self, fallback: &str) -> String {
        self.as_slice().format_or(fallback)
    }
}

/// `KEY: value` pairs joined with `" | "`; pairs without a value are skipped.
impl FieldValue for LabelMap {
    fn format_or(&self, fallback: &str) -> String {
        keyed(self.iter().map(|(k, v)| (k.as_str(), Some(v.as_str()))), fallback)
    }
}

impl FieldValue for Debut {
    fn format_or(&self, fallback: &str) -> String {
        keyed(self.entries(), fallback)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn format_or(&self, fallback: &str) -> String {
        (**self).format_or(fallback)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn format_or(&self, fallback: &str) -> String {
        match self {
            Some(v) => v.format_or(fallback),
            None => fallback.to_string(),
        }
    }
}

fn keyed<'a>(entries: impl IntoIterator<Item = (&'a str, Option<&'a str>)>, fallback: &str) -> String {
    let parts: Vec<String> = entries
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.format_or(NOT_AVAILABLE);
            (value != NOT_AVAILABLE).then(|| format!("{}: {}", display_key(key), value))
        })
        .collect();
    if parts.is_empty() {
        fallback.to_string()
    } else {
        parts.join(" | ")
    }
}

/// `appearsIn` -> `APPEARS IN`, `Part I` -> `PART I`.
pub fn display_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push(' ');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_uppercase());
    }
    out
}
