// Content-graph validation engine

use std::collections::HashSet;

use vitrina_content::{Catalog, CompanyDocument, ContentNamespace};
use vitrina_error_reporting::{Diagnostic, InstancePath, Location};

/// Validation context tracks the current location while checks run.
struct ValidationContext {
    document: String,
    path: InstancePath,
    diagnostics: Vec<Diagnostic>,
}

impl ValidationContext {
    fn new(document: &str) -> Self {
        Self {
            document: document.to_string(),
            path: InstancePath::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Record a warning at the current location.
    fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics.push(
            Diagnostic::warning(message)
                .at(Location::new(self.document.clone(), self.path.clone())),
        );
    }

    /// Execute a function with a key segment pushed onto the path.
    fn with_key<R>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push_key(key);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Execute a function with an index segment pushed onto the path.
    fn with_index<R>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push_index(index);
        let result = f(self);
        self.path.pop();
        result
    }
}

/// Validate the whole content namespace.
///
/// Runs the per-document passes over the organization profile and the three
/// catalogs, then the cross-document identifier checks. Returns every
/// finding; never fails.
pub fn validate(ns: &ContentNamespace) -> Vec<Diagnostic> {
    let mut diagnostics = validate_company(&ns.company);
    for (name, catalog) in [
        ("projects", &ns.projects),
        ("services", &ns.services),
        ("news", &ns.news),
    ] {
        diagnostics.extend(validate_catalog(name, catalog));
        diagnostics.extend(check_company_reference(name, catalog, &ns.company));
    }
    diagnostics
}

/// Validate the organization profile document.
pub fn validate_company(company: &CompanyDocument) -> Vec<Diagnostic> {
    let mut ctx = ValidationContext::new("company");

    ctx.with_key("brand", |ctx| {
        if company.brand.name.trim().is_empty() {
            ctx.with_key("name", |ctx| {
                ctx.warn("Organization brand `name` must be non-empty");
            });
        }
        if company.brand.logo_src.trim().is_empty() {
            ctx.with_key("logo_src", |ctx| {
                ctx.warn("Organization brand `logo_src` must be non-empty");
            });
        }
    });

    ctx.diagnostics
}

/// Validate one catalog document: required fields, duplicate identifiers
/// and slugs, detail/section linkage, image references.
pub fn validate_catalog(name: &str, catalog: &Catalog) -> Vec<Diagnostic> {
    let mut ctx = ValidationContext::new(name);

    let mut section_ids: HashSet<i64> = HashSet::new();
    let mut section_slugs: HashSet<String> = HashSet::new();

    ctx.with_key("sections", |ctx| {
        for (index, section) in catalog.sections.iter().enumerate() {
            ctx.with_index(index, |ctx| {
                if section.name.trim().is_empty() {
                    ctx.with_key("name", |ctx| ctx.warn("Section `name` must be non-empty"));
                }

                let slug = section.slug.trim();
                if slug.is_empty() {
                    ctx.with_key("slug", |ctx| ctx.warn("Section `slug` must be non-empty"));
                } else if !section_slugs.insert(slug.to_string()) {
                    ctx.with_key("slug", |ctx| {
                        ctx.warn(format!("Duplicate section slug `{}`", slug));
                    });
                }

                if !section_ids.insert(section.id) {
                    ctx.with_key("id", |ctx| {
                        ctx.warn(format!("Duplicate section id `{}`", section.id));
                    });
                }

                validate_details(ctx, section);
            });
        }
    });

    ctx.diagnostics
}

fn validate_details(ctx: &mut ValidationContext, section: &vitrina_content::Section) {
    let mut detail_ids: HashSet<i64> = HashSet::new();
    let mut detail_slugs: HashSet<String> = HashSet::new();

    ctx.with_key("details", |ctx| {
        for (index, detail) in section.details.iter().enumerate() {
            ctx.with_index(index, |ctx| {
                if detail.name.trim().is_empty() {
                    ctx.with_key("name", |ctx| ctx.warn("Detail `name` must be non-empty"));
                }
                if detail.alt.trim().is_empty() {
                    ctx.with_key("alt", |ctx| ctx.warn("Detail `alt` must be non-empty"));
                }

                let slug = detail.slug.trim();
                if slug.is_empty() {
                    ctx.with_key("slug", |ctx| ctx.warn("Detail `slug` must be non-empty"));
                } else if !detail_slugs.insert(slug.to_string()) {
                    ctx.with_key("slug", |ctx| {
                        ctx.warn(format!("Duplicate detail slug `{}` within section", slug));
                    });
                }

                if !detail_ids.insert(detail.id) {
                    ctx.with_key("id", |ctx| {
                        ctx.warn(format!("Duplicate detail id `{}` within section", detail.id));
                    });
                }

                if detail.section_id != section.id {
                    ctx.with_key("section_id", |ctx| {
                        ctx.warn(format!(
                            "Detail `section_id` ({}) does not match its section's `id` ({})",
                            detail.section_id, section.id
                        ));
                    });
                }

                let image = detail.image.trim();
                if !image.is_empty() && !is_local_reference(image) {
                    ctx.with_key("image", |ctx| {
                        ctx.warn(format!(
                            "Detail `image` must be a site-relative path, got `{}`",
                            image
                        ));
                    });
                }
            });
        }
    });
}

fn check_company_reference(
    name: &str,
    catalog: &Catalog,
    company: &CompanyDocument,
) -> Vec<Diagnostic> {
    let mut ctx = ValidationContext::new(name);
    if catalog.company_id != company.id {
        ctx.with_key("company_id", |ctx| {
            ctx.warn(format!(
                "Catalog `company_id` ({}) does not match organization profile `id` ({})",
                catalog.company_id, company.id
            ));
        });
    }
    ctx.diagnostics
}

/// A reference is local when it is relative to the site root: not `/…` or
/// `//…`, and carrying no URI scheme (`https:`, `data:`, ...).
fn is_local_reference(reference: &str) -> bool {
    if reference.starts_with('/') {
        return false;
    }
    match reference.split_once(':') {
        Some((scheme, _)) => !is_uri_scheme(scheme),
        None => true,
    }
}

fn is_uri_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        }
        _ => false,
    }
}
