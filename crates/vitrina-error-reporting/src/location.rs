//! Structured locations for diagnostics.
//!
//! A location identifies a content item by document name and the key/index
//! path leading to it, e.g. `projects:sections[1].details[0].slug`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step in an instance path: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PathSegment {
    /// A mapping key (e.g. `sections`)
    Key(String),
    /// A sequence index (e.g. `[2]`)
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{}", k),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// A path from a document root to the value a diagnostic refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    /// Create an empty path (the document root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a mapping key segment.
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    /// Push a sequence index segment.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Pop the most recent segment.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// The segments of this path, root first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether this path points at the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, PathSegment::Key(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for InstancePath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut path = InstancePath::new();
        for key in iter {
            path.push_key(key);
        }
        path
    }
}

/// Where a diagnostic points: a document and a path within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The logical document name (e.g. `projects`, `company`).
    pub document: String,

    /// The key/index path within the document.
    pub path: InstancePath,
}

impl Location {
    /// Create a location at the root of a document.
    pub fn document(name: impl Into<String>) -> Self {
        Self {
            document: name.into(),
            path: InstancePath::new(),
        }
    }

    /// Create a location with an explicit path.
    pub fn new(document: impl Into<String>, path: InstancePath) -> Self {
        Self {
            document: document.into(),
            path,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.document)
        } else {
            write!(f, "{}:{}", self.document, self.path)
        }
    }
}
