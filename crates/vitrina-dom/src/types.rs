//! Core types for the mutable page tree.

use crate::Result;
use crate::parser;
use crate::writer;

/// A parsed page template: an ordered sequence of top-level nodes.
///
/// Most documents have a single root element, but fragments (and documents
/// with a preserved doctype or leading comments) may have several top-level
/// nodes, so no single-root constraint is imposed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDocument {
    /// Top-level nodes in document order.
    pub children: Vec<Node>,
}

/// A node in the page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),

    /// Text content. Entity-escaped at serialization.
    Text(String),

    /// Raw markup emitted verbatim at serialization (rich-content bindings,
    /// preserved comments, the doctype).
    Raw(String),
}

/// An element with a tag name, attributes, and child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The tag name (`div`, `img`, ...).
    pub name: String,

    /// Attributes in document order.
    pub attributes: Vec<Attribute>,

    /// Child content of this element.
    pub children: Vec<Node>,
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The attribute name.
    pub name: String,

    /// The attribute value (after entity unescaping).
    pub value: String,
}

impl PageDocument {
    /// Parse a page template into a tree.
    pub fn parse(content: &str) -> Result<Self> {
        parser::parse(content)
    }

    /// Serialize the tree back to markup.
    pub fn to_html(&self) -> String {
        writer::write_nodes(&self.children)
    }

    /// The first top-level element, when one exists.
    ///
    /// For a full page template this is the `html` element.
    pub fn root_element_mut(&mut self) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Find the element carrying `id="<id>"`, depth-first.
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.children, &mut |el| {
            el.attribute("id") == Some(id)
        })
    }

    /// Find the first element matching a predicate, depth-first.
    pub fn find_element_mut(
        &mut self,
        mut pred: impl FnMut(&Element) -> bool,
    ) -> Option<&mut Element> {
        find_element_mut(&mut self.children, &mut pred)
    }

    /// Visit every element in pre-order, mutably.
    pub fn for_each_element_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        walk_elements_mut(&mut self.children, &mut f);
    }
}

fn find_element_mut<'a>(
    nodes: &'a mut [Node],
    pred: &mut impl FnMut(&Element) -> bool,
) -> Option<&'a mut Element> {
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                return Some(el);
            }
            if let Some(found) = find_element_mut(&mut el.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn walk_elements_mut(nodes: &mut [Node], f: &mut impl FnMut(&mut Element)) {
    for node in nodes {
        if let Node::Element(el) = node {
            f(el);
            walk_elements_mut(&mut el.children, f);
        }
    }
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add or replace an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder: set the `class` attribute.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attribute("class", class)
    }

    /// Builder: append a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Get an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.name != name);
        self.attributes.len() != before
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Replace all children with a single raw-markup node.
    pub fn set_raw(&mut self, markup: impl Into<String>) {
        self.children = vec![Node::Raw(markup.into())];
    }

    /// Replace all children.
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Concatenated text content of this element's subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Raw(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_builder() {
        let el = Element::new("article")
            .with_class("card")
            .with_attribute("id", "c1")
            .with_text("hello");
        assert_eq!(el.attribute("class"), Some("card"));
        assert_eq!(el.attribute("id"), Some("c1"));
        assert_eq!(el.text_content(), "hello");
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut el = Element::new("a");
        el.set_attribute("href", "one");
        el.set_attribute("href", "two");
        assert_eq!(el.attribute("href"), Some("two"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_remove_attribute() {
        let mut el = Element::new("a").with_attribute("href", "x");
        assert!(el.remove_attribute("href"));
        assert!(!el.remove_attribute("href"));
        assert_eq!(el.attribute("href"), None);
    }

    #[test]
    fn test_element_by_id_depth_first() {
        let mut page =
            PageDocument::parse(r#"<div><section id="a"><p id="b">x</p></section></div>"#).unwrap();
        assert_eq!(page.element_by_id_mut("b").unwrap().name, "p");
        assert!(page.element_by_id_mut("missing").is_none());
    }

    #[test]
    fn test_for_each_element_visits_pre_order() {
        let mut page = PageDocument::parse("<div><p>one</p><p>two</p></div>").unwrap();
        let mut names = Vec::new();
        page.for_each_element_mut(|el| names.push(el.name.clone()));
        assert_eq!(names, vec!["div", "p", "p"]);
    }
}
