/*
 * markers.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The marker vocabulary recognized on page-tree elements.
//!
//! Attribute markers come from a fixed table: each row maps a marker
//! attribute to the one target attribute the binder may write. Deriving the
//! target from the marker name at runtime would let a template mint
//! arbitrary attribute writes; the table keeps the writable surface
//! enumerable.

/// Marker attribute for text bindings: `data-text="company.brand.name"`.
pub const TEXT_MARKER: &str = "data-text";

/// Marker attribute for rich-content bindings: `data-html="site.intro_html"`.
pub const HTML_MARKER: &str = "data-html";

/// One attribute-marker row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrMarker {
    /// The marker attribute a template author writes.
    pub marker: &'static str,

    /// The attribute the binder writes (or removes).
    pub target: &'static str,
}

/// The enumerated attribute-marker table.
pub const ATTR_MARKERS: &[AttrMarker] = &[
    AttrMarker { marker: "data-attr-href", target: "href" },
    AttrMarker { marker: "data-attr-src", target: "src" },
    AttrMarker { marker: "data-attr-alt", target: "alt" },
    AttrMarker { marker: "data-attr-title", target: "title" },
    AttrMarker { marker: "data-attr-content", target: "content" },
    AttrMarker { marker: "data-attr-datetime", target: "datetime" },
    AttrMarker { marker: "data-attr-aria-label", target: "aria-label" },
];

/// A transform applied to a resolved attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Prefix `mailto:` (only when the value is non-empty).
    Mailto,
    /// Prefix `tel:` (only when the value is non-empty).
    Tel,
}

impl Transform {
    /// Look up a transform by its marker-value name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mailto" => Some(Transform::Mailto),
            "tel" => Some(Transform::Tel),
            _ => None,
        }
    }

    /// Apply the transform. Empty values stay empty so a missing address
    /// never becomes a bare `mailto:` link.
    pub fn apply(self, value: String) -> String {
        if value.is_empty() {
            return value;
        }
        match self {
            Transform::Mailto => format!("mailto:{}", value),
            Transform::Tel => format!("tel:{}", value),
        }
    }
}

/// A parsed attribute-marker value: `path` or `path|transform`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<'a> {
    /// The dotted path into the content namespace.
    pub path: &'a str,

    /// The recognized transform, when one was named and known.
    pub transform: Option<Transform>,

    /// A transform name that is not in the table. The value passes through
    /// unchanged; the binder reports the name once.
    pub unknown_transform: Option<&'a str>,
}

impl<'a> Binding<'a> {
    /// Split a raw marker value at the first `|`.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('|') {
            None => Binding {
                path: raw,
                transform: None,
                unknown_transform: None,
            },
            Some((path, name)) => match Transform::from_name(name) {
                Some(transform) => Binding {
                    path,
                    transform: Some(transform),
                    unknown_transform: None,
                },
                None => Binding {
                    path,
                    transform: None,
                    unknown_transform: Some(name),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_bare_path() {
        let binding = Binding::parse("company.brand.name");
        assert_eq!(binding.path, "company.brand.name");
        assert_eq!(binding.transform, None);
        assert_eq!(binding.unknown_transform, None);
    }

    #[test]
    fn test_parse_known_transforms() {
        assert_eq!(
            Binding::parse("contact.email|mailto").transform,
            Some(Transform::Mailto)
        );
        assert_eq!(
            Binding::parse("contact.phone|tel").transform,
            Some(Transform::Tel)
        );
    }

    #[test]
    fn test_parse_unknown_transform_passes_through() {
        let binding = Binding::parse("contact.email|uppercase");
        assert_eq!(binding.path, "contact.email");
        assert_eq!(binding.transform, None);
        assert_eq!(binding.unknown_transform, Some("uppercase"));
    }

    #[test]
    fn test_transform_skips_empty_values() {
        assert_eq!(Transform::Mailto.apply(String::new()), "");
        assert_eq!(Transform::Tel.apply(String::new()), "");
        assert_eq!(
            Transform::Mailto.apply("a@b.com".to_string()),
            "mailto:a@b.com"
        );
        assert_eq!(Transform::Tel.apply("+1234".to_string()), "tel:+1234");
    }

    #[test]
    fn test_marker_table_targets_are_distinct() {
        let mut targets: Vec<&str> = ATTR_MARKERS.iter().map(|m| m.target).collect();
        targets.sort_unstable();
        targets.dedup();
        assert_eq!(targets.len(), ATTR_MARKERS.len());
    }
}
