//! The merged content namespace.

use crate::model::{Catalog, CompanyDocument, SiteDocument};
use crate::parse::parse_document;
use serde_json::{Map, Value};
use vitrina_error_reporting::Diagnostic;

/// The raw documents of one render pass, already parsed from JSON.
#[derive(Debug, Clone, Default)]
pub struct RawDocuments {
    pub site: Value,
    pub company: Value,
    pub projects: Value,
    pub services: Value,
    pub news: Value,
}

/// The merged view of all loaded documents, addressable by dotted path,
/// plus the typed form of each document.
///
/// Constructed once per render pass and passed by reference to every
/// component that needs post-load lookups; nothing holds render state
/// outside of it. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ContentNamespace {
    value: Value,
    pub site: SiteDocument,
    pub company: CompanyDocument,
    pub projects: Catalog,
    pub services: Catalog,
    pub news: Catalog,
    parse_diagnostics: Vec<Diagnostic>,
}

impl ContentNamespace {
    /// Merge raw documents into one namespace and parse the typed model.
    ///
    /// The namespace exposes `site`, `infrastructure` (an alias for
    /// `site.infrastructure`, matching the paths page templates use),
    /// `company`, `projects`, `services`, and `news`.
    pub fn from_documents(docs: RawDocuments) -> Self {
        let mut parse_diagnostics = Vec::new();

        let (site, diag) = parse_document::<SiteDocument>("site", &docs.site);
        parse_diagnostics.extend(diag);
        let (company, diag) = parse_document::<CompanyDocument>("company", &docs.company);
        parse_diagnostics.extend(diag);
        let (projects, diag) = parse_document::<Catalog>("projects", &docs.projects);
        parse_diagnostics.extend(diag);
        let (services, diag) = parse_document::<Catalog>("services", &docs.services);
        parse_diagnostics.extend(diag);
        let (news, diag) = parse_document::<Catalog>("news", &docs.news);
        parse_diagnostics.extend(diag);

        let infrastructure = docs
            .site
            .get("infrastructure")
            .cloned()
            .unwrap_or(Value::Null);

        let mut map = Map::new();
        map.insert("site".to_string(), docs.site);
        map.insert("infrastructure".to_string(), infrastructure);
        map.insert("company".to_string(), docs.company);
        map.insert("projects".to_string(), docs.projects);
        map.insert("services".to_string(), docs.services);
        map.insert("news".to_string(), docs.news);

        Self {
            value: Value::Object(map),
            site,
            company,
            projects,
            services,
            news,
            parse_diagnostics,
        }
    }

    /// The merged namespace as a single document, for path resolution.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Diagnostics produced while parsing the typed model.
    pub fn parse_diagnostics(&self) -> &[Diagnostic] {
        &self.parse_diagnostics
    }

    /// The page language, defaulting to Spanish like the sites this feeds.
    pub fn lang(&self) -> &str {
        self.site.infrastructure.lang.as_deref().unwrap_or("es")
    }
}
