/*
 * binder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The binding applier: marker scan and value writes over the page tree.

use crate::markers::{ATTR_MARKERS, Binding, HTML_MARKER, TEXT_MARKER};
use serde_json::Value;
use vitrina_dom::{Element, PageDocument};
use vitrina_error_reporting::Diagnostic;
use vitrina_template::{interpolate_str, render_value, resolve};

/// Apply all markers in the page against the content namespace.
///
/// Mutates only the tree passed in. Absent paths degrade: text and rich
/// content become empty, target attributes are removed rather than written
/// empty. Returns advisory diagnostics (currently only unknown transform
/// names); nothing here fails.
pub fn apply_bindings(page: &mut PageDocument, doc: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    page.for_each_element_mut(|el| bind_element(el, doc, &mut diagnostics));
    diagnostics
}

/// Resolve a path and interpolate the result, as one string.
fn resolve_text(doc: &Value, path: &str) -> String {
    let resolved = resolve(doc, path).map(render_value).unwrap_or_default();
    interpolate_str(&resolved, doc)
}

fn bind_element(el: &mut Element, doc: &Value, diagnostics: &mut Vec<Diagnostic>) {
    if let Some(path) = el.attribute(TEXT_MARKER).map(str::to_string) {
        el.set_text(resolve_text(doc, &path));
    }

    if let Some(path) = el.attribute(HTML_MARKER).map(str::to_string) {
        // Trusted markup from the content graph, inserted verbatim.
        el.set_raw(resolve_text(doc, &path));
    }

    for marker in ATTR_MARKERS {
        let Some(raw) = el.attribute(marker.marker).map(str::to_string) else {
            continue;
        };

        let binding = Binding::parse(&raw);
        if let Some(name) = binding.unknown_transform {
            diagnostics.push(Diagnostic::warning(format!(
                "Unknown transform `{}` in marker `{}=\"{}\"`; value passed through",
                name, marker.marker, raw
            )));
        }

        let mut value = resolve_text(doc, binding.path);
        if let Some(transform) = binding.transform {
            value = transform.apply(value);
        }

        if value.is_empty() {
            el.remove_attribute(marker.target);
        } else {
            el.set_attribute(marker.target, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "company": {
                "brand": {"name": "Futura Solar"},
                "contact_info": {
                    "email": "a@b.com",
                    "phone": "+1234"
                }
            },
            "site": {
                "claim": "Energy by {{company.brand.name}}",
                "intro_html": "<strong>Solar</strong> power"
            }
        })
    }

    fn bind(template: &str) -> (String, Vec<Diagnostic>) {
        let mut page = PageDocument::parse(template).unwrap();
        let diagnostics = apply_bindings(&mut page, &doc());
        (page.to_html(), diagnostics)
    }

    #[test]
    fn test_text_binding_replaces_content() {
        let (html, _) = bind(r#"<h1 data-text="company.brand.name">placeholder</h1>"#);
        assert_eq!(html, r#"<h1 data-text="company.brand.name">Futura Solar</h1>"#);
    }

    #[test]
    fn test_text_binding_interpolates_and_escapes() {
        let (html, _) = bind(r#"<p data-text="site.intro_html">x</p>"#);
        // Bound as text: the markup arrives entity-escaped.
        assert_eq!(
            html,
            r#"<p data-text="site.intro_html">&lt;strong&gt;Solar&lt;/strong&gt; power</p>"#
        );
    }

    #[test]
    fn test_html_binding_inserts_verbatim() {
        let (html, _) = bind(r#"<div data-html="site.intro_html">x</div>"#);
        assert_eq!(
            html,
            r#"<div data-html="site.intro_html"><strong>Solar</strong> power</div>"#
        );
    }

    #[test]
    fn test_absent_path_yields_empty_text() {
        let (html, _) = bind(r#"<span data-text="missing.path">old</span>"#);
        assert_eq!(html, r#"<span data-text="missing.path"></span>"#);
    }

    #[test]
    fn test_nested_placeholder_in_bound_value() {
        let (html, _) = bind(r#"<p data-text="site.claim">x</p>"#);
        assert_eq!(
            html,
            r#"<p data-text="site.claim">Energy by Futura Solar</p>"#
        );
    }

    #[test]
    fn test_attr_binding_with_mailto() {
        let (html, _) = bind(
            r#"<a data-attr-href="company.contact_info.email|mailto" href="old">mail</a>"#,
        );
        assert_eq!(
            html,
            r#"<a data-attr-href="company.contact_info.email|mailto" href="mailto:a@b.com">mail</a>"#
        );
    }

    #[test]
    fn test_attr_binding_with_tel() {
        let (html, _) =
            bind(r#"<a data-attr-href="company.contact_info.phone|tel">call</a>"#);
        assert!(html.contains(r#"href="tel:+1234""#));
    }

    #[test]
    fn test_absent_value_removes_attribute() {
        let (html, _) = bind(r#"<a data-attr-href="missing.path|mailto" href="old">x</a>"#);
        // Never `href="mailto:"`, never `href=""` - the attribute goes away.
        assert_eq!(html, r#"<a data-attr-href="missing.path|mailto">x</a>"#);
    }

    #[test]
    fn test_unknown_transform_passes_through_with_diagnostic() {
        let (html, diagnostics) =
            bind(r#"<a data-attr-href="company.contact_info.email|shout">x</a>"#);
        assert!(html.contains(r#"href="a@b.com""#));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("shout"));
    }

    #[test]
    fn test_markers_survive_binding() {
        let (html, _) = bind(r#"<h1 data-text="company.brand.name">x</h1>"#);
        assert!(html.contains("data-text"));
    }
}
