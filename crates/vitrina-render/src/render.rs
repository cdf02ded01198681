/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The render pass: bind a page template against a content namespace.

use crate::binder::apply_bindings;
use crate::builders;
use thiserror::Error;
use tracing::debug;
use vitrina_content::ContentNamespace;
use vitrina_dom::{DomError, PageDocument};
use vitrina_error_reporting::Diagnostic;

/// Errors that abort a render pass.
///
/// Only the template itself can do this; content problems degrade.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to parse page template: {0}")]
    Template(#[from] DomError),
}

/// The result of a render pass.
#[derive(Debug)]
pub struct RenderOutput {
    /// The bound, serialized page.
    pub html: String,

    /// Advisory findings from the binding pass (content parse fallbacks,
    /// unknown transforms). Validation findings are separate - see
    /// `vitrina-validation`.
    pub diagnostics: Vec<Diagnostic>,
}

/// Mount ids, in the fixed order the builders run. The mounts are disjoint
/// subtrees, so the order carries no data dependency; fixing it keeps
/// renders reproducible byte for byte.
const KPIS_MOUNT: &str = "kpis";
const ABOUT_CARDS_MOUNT: &str = "about-cards";
const SERVICE_CARDS_MOUNT: &str = "services-cards";
const PROJECTS_MOUNT: &str = "projects-grid";
const SERVICES_MOUNT: &str = "services-grid";
const NEWS_MOUNT: &str = "news-grid";
const CONTACT_LOCATIONS_MOUNT: &str = "contact-locations";
const FOOTER_LOCATIONS_MOUNT: &str = "footer-locations";
const LEGAL_MOUNT: &str = "legal-modal-desc";

/// Render a page template against a content namespace.
///
/// Parses the template, binds the root `lang` attribute, applies all
/// markers, runs the list builders in declared order, and serializes the
/// result. Returns the page plus any advisory diagnostics; fails only when
/// the template does not parse.
pub fn render_page(template: &str, ns: &ContentNamespace) -> Result<RenderOutput, RenderError> {
    let mut page = PageDocument::parse(template)?;
    let doc = ns.value();

    let mut diagnostics: Vec<Diagnostic> = ns.parse_diagnostics().to_vec();

    if let Some(root) = page.root_element_mut()
        && root.name == "html"
    {
        root.set_attribute("lang", ns.lang());
    }

    diagnostics.extend(apply_bindings(&mut page, doc));
    debug!(diagnostics = diagnostics.len(), "applied page bindings");

    builders::build_hero_kpis(&mut page, KPIS_MOUNT, &ns.company.hero.kpis, doc);
    builders::build_cards(&mut page, ABOUT_CARDS_MOUNT, &ns.company.about.cards, doc);
    builders::build_cards(&mut page, SERVICE_CARDS_MOUNT, &ns.company.services.cards, doc);
    builders::build_project_grid(&mut page, PROJECTS_MOUNT, &ns.projects, doc);
    builders::build_service_grid(&mut page, SERVICES_MOUNT, &ns.services, doc);
    builders::build_news_grid(&mut page, NEWS_MOUNT, &ns.news, doc);
    builders::build_contact_locations(&mut page, CONTACT_LOCATIONS_MOUNT, &ns.company.locations, doc);
    builders::build_footer_locations(&mut page, FOOTER_LOCATIONS_MOUNT, &ns.company.locations, doc);
    builders::build_legal_paragraphs(
        &mut page,
        LEGAL_MOUNT,
        &ns.site.infrastructure.legal.paragraphs,
        doc,
    );

    let html = page.to_html();
    debug!(bytes = html.len(), "rendered page");

    Ok(RenderOutput { html, diagnostics })
}
