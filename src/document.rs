//! Whole-document wrapper and the visitor contract consumed by the writer.

use crate::node::{Attributes, Content, ElementNode, MixedItem, Scalar};
use crate::Result;

/// The optional `<?xml ... ?>` declaration of a document.
///
/// The writer emits the declaration only when at least one field is present.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct XmlHeader {
    pub version: Option<String>,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl XmlHeader {
    /// The conventional `version="1.0" encoding="UTF-8"` header.
    pub fn default_header() -> Self {
        XmlHeader {
            version: Some("1.0".to_string()),
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.encoding.is_none() && self.standalone.is_none()
    }
}

/// A complete document: an optional header and a single root element.
#[derive(Clone, Debug, PartialEq)]
pub struct XmlDocument {
    pub header: Option<XmlHeader>,
    pub root: ElementNode,
}

impl XmlDocument {
    pub fn new(root: ElementNode) -> Self {
        XmlDocument { header: None, root }
    }

    pub fn with_header(header: XmlHeader, root: ElementNode) -> Self {
        XmlDocument {
            header: Some(header),
            root,
        }
    }

    /// Drives a visitor over the document: header, then the root subtree.
    pub fn accept<V: XmlVisitor>(&self, visitor: &mut V) -> Result<()> {
        visitor.enter_document(self.header.as_ref())?;
        self.root.accept(visitor)?;
        visitor.exit_document()
    }
}

/// The contract between the tree and its serializer.
///
/// Elements with `Empty` or `Simple` content are delivered in one piece via
/// [`visit_scalar_element`](XmlVisitor::visit_scalar_element); elements with
/// `Complex` or `Mixed` content bracket their children between
/// `enter_element` and `exit_element`.
pub trait XmlVisitor {
    fn enter_document(&mut self, header: Option<&XmlHeader>) -> Result<()>;
    fn exit_document(&mut self) -> Result<()>;

    fn enter_element(&mut self, name: &str, attributes: &Attributes) -> Result<()>;
    fn exit_element(&mut self, name: &str) -> Result<()>;

    fn visit_scalar_element(
        &mut self,
        name: &str,
        attributes: &Attributes,
        scalar: Option<&Scalar>,
    ) -> Result<()>;

    fn visit_text(&mut self, text: &str) -> Result<()>;
    fn visit_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

impl ElementNode {
    /// Drives a visitor over this element's subtree.
    pub fn accept<V: XmlVisitor>(&self, visitor: &mut V) -> Result<()> {
        match &self.content {
            Content::Empty => visitor.visit_scalar_element(&self.name, &self.attributes, None),
            Content::Simple(scalar) => {
                visitor.visit_scalar_element(&self.name, &self.attributes, Some(scalar))
            }
            Content::Complex(children) => {
                visitor.enter_element(&self.name, &self.attributes)?;
                for child in children {
                    child.accept(visitor)?;
                }
                visitor.exit_element(&self.name)
            }
            Content::Mixed(items) => {
                visitor.enter_element(&self.name, &self.attributes)?;
                for item in items {
                    match item {
                        MixedItem::Text(text) => visitor.visit_text(text)?,
                        MixedItem::Bytes(bytes) => visitor.visit_bytes(bytes)?,
                        MixedItem::Element(child) => child.accept(visitor)?,
                    }
                }
                visitor.exit_element(&self.name)
            }
        }
    }
}
