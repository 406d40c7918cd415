//! Rendering of tag maps as one-line display strings.

use serde_json::{Map, Value};

/// Renders a tag map as `"key: value, key: value"`.
///
/// Keys are sorted lexicographically. Entries whose value is falsy (`null`,
/// `false`, `0`, `NaN`, `""`) are left out. Returns an empty string when no
/// entry survives.
#[must_use]
pub fn tags_to_string(tags: &Map<String, Value>) -> String {
    let mut keys: Vec<&String> = tags.keys().collect();
    keys.sort();

    keys.into_iter()
        .filter_map(|key| {
            let value = tags.get(key)?;
            is_truthy(value).then(|| format!("{key}: {}", display_value(value)))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            // Integral floats print without a trailing ".0" up to the
            // magnitude where browsers switch to exponent notation.
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
