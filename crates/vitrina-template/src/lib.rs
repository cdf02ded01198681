/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Path resolution and placeholder interpolation for vitrina.
//!
//! This crate implements the two leaf components of the binding engine:
//!
//! - [`resolve`]: dotted-path lookup (`company.brand.name`,
//!   `sections.0.details.2.slug`) over a parsed content document. Absence is
//!   a first-class result — a missing segment yields `None`, never an error.
//! - [`interpolate`] / [`interpolate_str`]: expansion of `{{ path }}`
//!   placeholders inside string values, repeated until a fixed point or a
//!   ceiling of [`MAX_PASSES`] passes. The ceiling guarantees termination
//!   when two paths reference each other cyclically; in that pathological
//!   case the output keeps a residual placeholder.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vitrina_template::{interpolate_str, resolve};
//!
//! let doc = json!({"company": {"brand": {"name": "Futura Solar"}}});
//! assert_eq!(
//!     resolve(&doc, "company.brand.name"),
//!     Some(&json!("Futura Solar"))
//! );
//! assert_eq!(
//!     interpolate_str("© {{company.brand.name}}", &doc),
//!     "© Futura Solar"
//! );
//! ```

mod interpolate;
mod resolve;

pub use interpolate::{MAX_PASSES, interpolate, interpolate_str};
pub use resolve::{render_value, resolve};
