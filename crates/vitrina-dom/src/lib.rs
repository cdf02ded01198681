//! Mutable page-template tree for vitrina.
//!
//! Page templates are XHTML documents (or fragments) carrying declarative
//! binding markers. This crate parses a template into a mutable element
//! tree, supports the lookups and mutations the binding engine needs
//! (element-by-id, pre-order walks, attribute and child replacement), and
//! serializes the bound tree back to markup.
//!
//! Serialization entity-escapes text and attribute values; [`Node::Raw`]
//! content passes through verbatim, which is how rich-content bindings and
//! preserved comments reach the output.
//!
//! # Example
//!
//! ```
//! use vitrina_dom::PageDocument;
//!
//! let mut page = PageDocument::parse(r#"<div id="x"><span>old</span></div>"#).unwrap();
//! page.element_by_id_mut("x").unwrap().set_text("a < b");
//! assert_eq!(page.to_html(), r#"<div id="x">a &lt; b</div>"#);
//! ```

mod error;
mod parser;
mod types;
mod writer;

pub use error::DomError;
pub use parser::parse;
pub use types::{Attribute, Element, Node, PageDocument};
pub use writer::is_void_element;

/// Result type for page-tree operations.
pub type Result<T> = std::result::Result<T, DomError>;
