//! Typed content model and merged namespace for vitrina.
//!
//! Content arrives as five JSON documents: site infrastructure, the
//! organization profile, and the project/service/news catalogs. This crate
//! parses each into a checked structure up front — leniently, so a document
//! with gaps still yields something renderable — and merges the raw values
//! into one [`ContentNamespace`] addressable by dotted paths.
//!
//! Parsing is deliberately forgiving: missing fields take defaults and are
//! left for the validator to report; only a document whose overall shape is
//! wrong degrades to its default wholesale, with one malformed-document
//! diagnostic. Nothing in this crate aborts a render.

mod model;
mod namespace;
mod parse;

pub use model::{
    Brand, Card, CardGroup, Catalog, CompanyDocument, ContactInfo, Detail, Hero, Infrastructure,
    Kpi, Legal, OfficeLocation, Section, SiteDocument,
};
pub use namespace::{ContentNamespace, RawDocuments};
pub use parse::parse_document;
