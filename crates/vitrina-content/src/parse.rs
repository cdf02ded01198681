//! Lenient document parsing.

use serde::de::DeserializeOwned;
use serde_json::Value;
use vitrina_error_reporting::{Diagnostic, Location};

/// Parse a raw document into its typed form.
///
/// A document that fails to deserialize degrades to the type's default
/// (rendering then sees empty collections) and the failure is reported as a
/// single malformed-document diagnostic instead of an error — a broken
/// content file must never blank the whole page.
pub fn parse_document<T>(name: &str, value: &Value) -> (T, Option<Diagnostic>)
where
    T: DeserializeOwned + Default,
{
    // An absent document is a plain content gap, not a malformed one.
    if value.is_null() {
        return (T::default(), None);
    }

    match serde_json::from_value(value.clone()) {
        Ok(document) => (document, None),
        Err(err) => (
            T::default(),
            Some(
                Diagnostic::error(format!("Malformed `{}` document: {}", name, err))
                    .at(Location::document(name)),
            ),
        ),
    }
}
