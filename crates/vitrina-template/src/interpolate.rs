/*
 * interpolate.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder interpolation over content documents.

use crate::resolve::{render_value, resolve};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

/// Maximum number of substitution passes.
///
/// A resolved value may itself contain placeholders, so substitution repeats
/// until a pass changes nothing. The ceiling bounds the cost and guarantees
/// termination when paths reference each other cyclically; such input keeps
/// a residual placeholder instead of looping.
pub const MAX_PASSES: usize = 5;

/// `{{ path }}`, whitespace tolerated. The path grammar is restricted to
/// `[A-Za-z0-9_.-]` so braces and markup cannot be injected through it.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").unwrap());

/// Expand `{{ path }}` placeholders in a string against a document.
///
/// Absent paths substitute as the empty string. Substitution repeats until a
/// fixed point or [`MAX_PASSES`] passes, whichever comes first.
pub fn interpolate_str(input: &str, doc: &Value) -> String {
    let mut result = input.to_string();
    for _ in 0..MAX_PASSES {
        let next = PLACEHOLDER.replace_all(&result, |caps: &Captures| {
            resolve(doc, &caps[1]).map(render_value).unwrap_or_default()
        });
        if next == result {
            break;
        }
        result = next.into_owned();
    }
    result
}

/// Interpolate a value: strings are expanded, everything else passes through
/// unchanged so numeric and boolean content keeps its type.
pub fn interpolate(value: &Value, doc: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(interpolate_str(s, doc)),
        other => other.clone(),
    }
}
