//! Structural validation of the vitrina content graph.
//!
//! A pure inspection pass over the typed content model. Every violated
//! condition produces one [`vitrina_error_reporting::Diagnostic`] with a
//! structured location; the
//! pass never mutates its input, never stops at the first finding, and no
//! finding ever changes rendering behavior — a partially broken content
//! graph still renders best-effort (fail-open by design).
//!
//! Per-document checks run first; cross-document checks (catalog
//! `company_id` against the organization profile `id`) run after their
//! inputs have each been individually validated.

mod validator;

pub use validator::{validate, validate_catalog, validate_company};
