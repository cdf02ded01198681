//! Error types for page-template parsing.

use thiserror::Error;

/// Errors that can occur while parsing a page template.
///
/// Unlike content-graph problems, which are advisory diagnostics, a template
/// that does not parse is a real failure: there is no tree to bind into.
#[derive(Debug, Error)]
pub enum DomError {
    /// Malformed markup reported by the underlying reader.
    #[error("Markup syntax error at offset {position}: {message}")]
    Syntax { message: String, position: u64 },

    /// A closing tag with no matching open element.
    #[error("Unexpected closing tag </{name}>")]
    UnexpectedClosingTag { name: String },

    /// A closing tag that does not match the innermost open element.
    #[error("Mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag { expected: String, found: String },

    /// Input ended with elements still open.
    #[error("Unexpected end of input: missing closing tag </{name}>")]
    UnexpectedEof { name: String },
}
