//! Minimal owned element tree on top of `quick-xml`.
//!
//! The descriptor extraction needs "first descendant with this tag" and
//! "all text below this element" queries, so the document is decoded into a
//! small tree first. Attributes, comments, processing instructions and the
//! doctype are dropped.

use markdocs_core::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A node below an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Unescaped text or CDATA content
    Text(String),
}

/// An element with its local (namespace-stripped) name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub children: Vec<Node>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    /// Iterates over direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Iterates over direct child elements with the given name.
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a Self> + use<'a, 'n> {
        self.child_elements().filter(move |child| child.name == name)
    }

    /// Returns the first direct child element with the given name.
    pub fn first_child(&self, name: &str) -> Option<&Self> {
        self.children_named(name).next()
    }

    /// Finds the first descendant with the given name in document order.
    ///
    /// Elements named in `barriers` can still match, but the search never
    /// descends into them.
    pub fn find_descendant(&self, name: &str, barriers: &[&str]) -> Option<&Self> {
        for child in self.child_elements() {
            if child.name == name {
                return Some(child);
            }
            if barriers.contains(&child.name.as_str()) {
                continue;
            }
            if let Some(found) = child.find_descendant(name, barriers) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenates all text below this element.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }
}

/// Decodes a UTF-8 XML document into its root element.
///
/// # Errors
///
/// Returns [`Error::MalformedDescriptor`] if the input is not UTF-8, is not
/// well-formed, has no root element, or has content after the root element.
pub fn parse_document(input: &[u8]) -> Result<Element> {
    let text = std::str::from_utf8(input).map_err(|e| Error::MalformedDescriptor {
        message: format!("descriptor is not valid UTF-8: {e}"),
        position: u64::try_from(e.valid_up_to()).ok(),
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = Reader::from_str(text);
    reader.config_mut().expand_empty_elements = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| Error::MalformedDescriptor {
            message: format!("XML parse error: {e}"),
            position: Some(reader.error_position()),
        })?;

        match event {
            Event::Start(ref start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(malformed_at(&reader, "content after the root element"));
                }
                stack.push(Element::new(local_name(start)));
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed_at(&reader, "unexpected closing tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Event::Text(ref content) => {
                let unescaped = content.unescape().map_err(|e| Error::MalformedDescriptor {
                    message: format!("invalid character data: {e}"),
                    position: Some(reader.buffer_position()),
                })?;
                push_text(&mut stack, &unescaped, &reader)?;
            }
            Event::CData(content) => {
                let raw = content.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&raw), &reader)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed_at(
            &reader,
            &format!("unexpected end of document inside <{}>", open.name),
        ));
    }

    root.ok_or_else(|| Error::malformed("document has no root element"))
}

fn push_text(stack: &mut [Element], text: &str, reader: &Reader<&[u8]>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text.to_string()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(malformed_at(reader, "text outside the root element")),
    }
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn malformed_at(reader: &Reader<&[u8]>, message: &str) -> Error {
    Error::MalformedDescriptor {
        message: message.to_string(),
        position: Some(reader.buffer_position()),
    }
}
