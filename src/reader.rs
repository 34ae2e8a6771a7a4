//! XML text input.
//!
//! The reader turns XML text back into an [`XmlDocument`] tree. It is
//! fed by the `quick-xml` event stream and keeps a stack of in-progress
//! elements: a start tag pushes a fresh node, an end tag pops it and
//! appends it to the node below, and the final pop yields the root.
//!
//! Text events are entity-decoded and trimmed; whitespace-only text
//! between child elements is dropped. CDATA sections become byte
//! payloads, so `<a>foo<b/><![CDATA[DATA]]></a>` reads back as mixed
//! content of text, element and bytes.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::document::{XmlDocument, XmlHeader};
use crate::error::{Error, Result};
use crate::node::ElementNode;

/// Parses a complete XML document.
///
/// # Errors
///
/// Returns [`Error::Parse`] with the offending line and column when the
/// text is not well-formed XML or contains anything but one root
/// element, an optional declaration, comments and processing
/// instructions.
pub fn read_document(xml: &str) -> Result<XmlDocument> {
    DocumentReader::new(xml).read()
}

/// Parses XML text and returns just its root element.
///
/// # Errors
///
/// See [`read_document`].
pub fn read_element(xml: &str) -> Result<ElementNode> {
    read_document(xml).map(|document| document.root)
}

struct DocumentReader<'a> {
    input: &'a str,
    reader: Reader<&'a [u8]>,
    stack: Vec<ElementNode>,
    header: Option<XmlHeader>,
    root: Option<ElementNode>,
}

impl<'a> DocumentReader<'a> {
    fn new(input: &'a str) -> Self {
        DocumentReader {
            input,
            reader: Reader::from_str(input),
            stack: Vec::new(),
            header: None,
            root: None,
        }
    }

    fn read(mut self) -> Result<XmlDocument> {
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(error) => return Err(self.error(error)),
            };
            match event {
                Event::Decl(declaration) => {
                    let mut header = XmlHeader::default();
                    match declaration.version() {
                        Ok(version) => {
                            header.version = Some(String::from_utf8_lossy(&version).into_owned());
                        }
                        Err(error) => return Err(self.error(error)),
                    }
                    if let Some(encoding) = declaration.encoding() {
                        let encoding = encoding.map_err(|error| self.error(error))?;
                        header.encoding = Some(String::from_utf8_lossy(&encoding).into_owned());
                    }
                    if let Some(standalone) = declaration.standalone() {
                        let standalone = standalone.map_err(|error| self.error(error))?;
                        header.standalone =
                            Some(String::from_utf8_lossy(&standalone).into_owned());
                    }
                    self.header = Some(header);
                }
                Event::Start(start) => {
                    let node = self.open_element(&start)?;
                    self.stack.push(node);
                }
                Event::Empty(start) => {
                    let node = self.open_element(&start)?;
                    self.close_element(node)?;
                }
                Event::End(_) => {
                    // Tag balance is checked by the event reader.
                    let node = match self.stack.pop() {
                        Some(node) => node,
                        None => return Err(self.error_at("unmatched closing tag")),
                    };
                    self.close_element(node)?;
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|error| self.error(error))?;
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    match self.stack.last_mut() {
                        Some(parent) => parent.append_text(trimmed),
                        None => return Err(self.error_at("text outside of the root element")),
                    }
                }
                Event::CData(cdata) => match self.stack.last_mut() {
                    Some(parent) => parent.append_bytes(cdata.into_inner().into_owned()),
                    None => return Err(self.error_at("CDATA outside of the root element")),
                },
                Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Eof => break,
            }
        }
        if !self.stack.is_empty() {
            return Err(self.error_at("unexpected end of input inside an element"));
        }
        let root = match self.root {
            Some(root) => root,
            None => return Err(self.error_at("document has no root element")),
        };
        Ok(match self.header {
            Some(header) => XmlDocument::with_header(header, root),
            None => XmlDocument::new(root),
        })
    }

    fn open_element(&mut self, start: &BytesStart<'_>) -> Result<ElementNode> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|error| self.error_at(error))?
            .to_string();
        let mut node = ElementNode::empty(name);
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|error| self.error_at(error))?;
            let key = std::str::from_utf8(attribute.key.as_ref())
                .map_err(|error| self.error_at(error))?
                .to_string();
            let value = attribute
                .unescape_value()
                .map_err(|error| self.error(error))?
                .into_owned();
            node.attributes.insert(key, value);
        }
        Ok(node)
    }

    fn close_element(&mut self, node: ElementNode) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.append_child(node),
            None => {
                if self.root.is_some() {
                    return Err(self.error_at("more than one root element"));
                }
                self.root = Some(node);
            }
        }
        Ok(())
    }

    fn error(&self, error: impl std::fmt::Display) -> Error {
        self.error_at(error)
    }

    fn error_at(&self, message: impl std::fmt::Display) -> Error {
        let position = (self.reader.buffer_position() as usize).min(self.input.len());
        let consumed = &self.input.as_bytes()[..position];
        let line = consumed.iter().filter(|byte| **byte == b'\n').count() + 1;
        let column = consumed
            .iter()
            .rev()
            .take_while(|byte| **byte != b'\n')
            .count()
            + 1;
        Error::parse(line, column, message)
    }
}
