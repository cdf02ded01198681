//! Page-template parser built on quick-xml.
//!
//! Templates are XHTML: well-formed, with void elements written
//! self-closing (`<img />`). The parser keeps text verbatim (no whitespace
//! trimming), preserves comments and the doctype as raw nodes so they
//! survive the render round trip, and reports structural problems
//! (mismatched or unclosed tags) as [`DomError`]s.

use crate::{Attribute, DomError, Element, Node, PageDocument, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse a page template into a [`PageDocument`].
pub fn parse(content: &str) -> Result<PageDocument> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;
    // The parser does its own structural validation (mismatched/stray end
    // tags) via the element stack below, reporting them as typed DomErrors.
    // Disable quick-xml's own end-name checking so it doesn't short-circuit
    // that logic with a generic syntax error first.
    reader.config_mut().check_end_names = false;
    // Likewise, let a stray closing tag through so the stack logic below can
    // report it as an UnexpectedClosingTag rather than quick-xml rejecting it.
    reader.config_mut().allow_unmatched_ends = true;

    let mut top: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let element = element_from_start(&e, &reader)?;
                stack.push(element);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e, &reader)?;
                push_node(&mut stack, &mut top, Node::Element(element));
            }
            Ok(Event::End(e)) => {
                let end_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let element = stack.pop().ok_or(DomError::UnexpectedClosingTag {
                    name: end_name.clone(),
                })?;
                if element.name != end_name {
                    return Err(DomError::MismatchedEndTag {
                        expected: element.name,
                        found: end_name,
                    });
                }
                push_node(&mut stack, &mut top, Node::Element(element));
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| syntax_error(err, &reader))?
                    .into_owned();
                push_node(&mut stack, &mut top, Node::Text(text));
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_node(&mut stack, &mut top, Node::Text(text));
            }
            Ok(Event::Comment(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_node(&mut stack, &mut top, Node::Raw(format!("<!--{}-->", text)));
            }
            Ok(Event::DocType(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_node(
                    &mut stack,
                    &mut top,
                    Node::Raw(format!("<!DOCTYPE {}>", text.trim())),
                );
            }
            Ok(Event::Decl(_) | Event::PI(_)) => {
                // XML declarations and processing instructions have no place
                // in the rendered page.
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(syntax_error(e, &reader)),
        }
    }

    if let Some(unclosed) = stack.pop() {
        return Err(DomError::UnexpectedEof {
            name: unclosed.name,
        });
    }

    Ok(PageDocument { children: top })
}

fn syntax_error(err: impl std::fmt::Display, reader: &Reader<&[u8]>) -> DomError {
    DomError::Syntax {
        message: err.to_string(),
        position: reader.error_position(),
    }
}

fn element_from_start(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| syntax_error(err, reader))?;
        attributes.push(Attribute {
            name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            value: attr
                .unescape_value()
                .map_err(|err| syntax_error(err, reader))?
                .into_owned(),
        });
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn push_node(stack: &mut [Element], top: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => top.push(node),
    }
}
