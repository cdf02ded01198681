/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Marker binding and list building for vitrina.
//!
//! This crate turns a parsed page template plus a content namespace into the
//! final page:
//!
//! - [`binder`] scans the tree for `data-text`, `data-html`, and
//!   `data-attr-*` markers and writes resolved, interpolated values into
//!   text content, rich content, and attributes.
//! - [`builders`] render ordered collections (KPIs, cards, catalog grids,
//!   location blocks, legal text) into element fragments mounted at
//!   well-known ids.
//! - [`render_page`] runs the whole pass in a fixed order and serializes
//!   the result.
//!
//! Everything here is fail-open: content gaps become empty text or removed
//! attributes, questionable markers become advisory diagnostics, and only a
//! template that does not parse aborts the pass.

pub mod binder;
pub mod builders;
pub mod markers;
mod render;

pub use binder::apply_bindings;
pub use builders::grid_density_class;
pub use markers::{ATTR_MARKERS, AttrMarker, Binding, HTML_MARKER, TEXT_MARKER, Transform};
pub use render::{RenderError, RenderOutput, render_page};
