/*
 * resolve.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Dotted-path lookup over content documents.

use serde_json::Value;

/// Resolve a dotted path against a content document.
///
/// Segments are separated by `.`; a segment that parses as an unsigned
/// integer indexes into sequences. Resolution returns `None` for the empty
/// path, for any missing segment, and when an intermediate value is not
/// traversable (a scalar or null). It never fails.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use vitrina_template::resolve;
///
/// let doc = json!({"sections": [{"slug": "solar"}]});
/// assert_eq!(resolve(&doc, "sections.0.slug"), Some(&json!("solar")));
/// assert_eq!(resolve(&doc, "sections.1.slug"), None);
/// assert_eq!(resolve(&doc, ""), None);
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = doc;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Render a resolved value for insertion into text or an attribute.
///
/// Strings pass through; numbers and booleans use their canonical display
/// form. Null, sequences, and mappings render as the empty string — a
/// structural value reaching a text slot is a content gap, and gaps degrade
/// to nothing rather than leaking debug formatting into the page.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
