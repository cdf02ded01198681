//! Diagnostic message types for vitrina.
//!
//! The validator and the binding engine both report problems as advisory
//! [`Diagnostic`] values rather than errors: a finding never interrupts a
//! render pass. Each diagnostic carries a structured [`Location`] (document
//! name plus key/index path into that document) so tooling can point at the
//! offending content item without re-deriving it from the message text.

mod diagnostic;
mod location;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use location::{InstancePath, Location, PathSegment};
