//! The XML element tree and its content state machine.
//!
//! An [`ElementNode`] is a name, an ordered attribute map, and a [`Content`]
//! value. Content moves through a strict promotion order as material is
//! appended:
//!
//! ```text
//! empty ──text|bytes──▶ simple ──text|bytes|element──▶ mixed
//! empty ──element─────▶ complex ──element──▶ complex
//!                       complex ──text|bytes──▶ mixed
//!                       mixed ──anything──▶ mixed
//! ```
//!
//! Appending never moves a node backwards along this order. Promotion out of
//! `Simple` or `Complex` absorbs the existing payload as the first item(s)
//! of the resulting `Mixed` collection.
//!
//! Indexed `insert` variants obey the same promotion table; an out-of-range
//! index is a precondition violation (the indices are always produced by the
//! encoding engine, never by untrusted input) and panics.

use indexmap::IndexMap;

/// The ordered attribute map of an element.
///
/// `IndexMap` keeps attributes in insertion order so that serialized output
/// is deterministic.
pub type Attributes = IndexMap<String, String>;

/// A single scalar payload: raw text, or a byte blob the writer renders as
/// a CDATA section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Bytes(Vec<u8>),
}

/// One entry of a [`Content::Mixed`] collection.
#[derive(Clone, Debug, PartialEq)]
pub enum MixedItem {
    Text(String),
    Bytes(Vec<u8>),
    Element(ElementNode),
}

impl From<Scalar> for MixedItem {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => MixedItem::Text(text),
            Scalar::Bytes(bytes) => MixedItem::Bytes(bytes),
        }
    }
}

/// The content of an element, as a four-state tagged union.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    Simple(Scalar),
    Complex(Vec<ElementNode>),
    Mixed(Vec<MixedItem>),
}

enum Operation {
    Append,
    Insert(usize),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, Content::Simple(_))
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Content::Complex(_))
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Content::Mixed(_))
    }

    /// The simple text payload, if this content is `Simple(Text)`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Simple(Scalar::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The simple byte payload, if this content is `Simple(Bytes)`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Content::Simple(Scalar::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// The child elements, if this content is `Complex`.
    pub fn as_children(&self) -> Option<&[ElementNode]> {
        match self {
            Content::Complex(children) => Some(children),
            _ => None,
        }
    }

    /// The interleaved items, if this content is `Mixed`.
    pub fn as_items(&self) -> Option<&[MixedItem]> {
        match self {
            Content::Mixed(items) => Some(items),
            _ => None,
        }
    }

    /// The number of scalar payloads, children, or items held.
    pub fn len(&self) -> usize {
        match self {
            Content::Empty => 0,
            Content::Simple(_) => 1,
            Content::Complex(children) => children.len(),
            Content::Mixed(items) => items.len(),
        }
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.add_scalar(Scalar::Text(text.into()), Operation::Append);
    }

    pub fn append_bytes(&mut self, bytes: impl Into<Vec<u8>>) {
        self.add_scalar(Scalar::Bytes(bytes.into()), Operation::Append);
    }

    pub fn append_child(&mut self, child: ElementNode) {
        self.add_child(child, Operation::Append);
    }

    /// Inserts text at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` exceeds the length of the already-homogeneous
    /// collection, or is non-zero when promoting out of `Empty`'s scalar slot.
    pub fn insert_text(&mut self, index: usize, text: impl Into<String>) {
        self.add_scalar(Scalar::Text(text.into()), Operation::Insert(index));
    }

    /// Inserts bytes at `index`. Panics on an out-of-range index.
    pub fn insert_bytes(&mut self, index: usize, bytes: impl Into<Vec<u8>>) {
        self.add_scalar(Scalar::Bytes(bytes.into()), Operation::Insert(index));
    }

    /// Inserts a child element at `index`. Panics on an out-of-range index.
    pub fn insert_child(&mut self, index: usize, child: ElementNode) {
        self.add_child(child, Operation::Insert(index));
    }

    fn add_scalar(&mut self, scalar: Scalar, operation: Operation) {
        let current = std::mem::take(self);
        *self = match current {
            Content::Empty => {
                if let Operation::Insert(index) = operation {
                    assert!(index == 0, "index out of bounds: expected 0, found {index}");
                }
                Content::Simple(scalar)
            }
            Content::Simple(existing) => {
                let items = vec![MixedItem::from(existing)];
                Content::Mixed(with_item(items, MixedItem::from(scalar), operation))
            }
            Content::Complex(children) => {
                let items = children.into_iter().map(MixedItem::Element).collect();
                Content::Mixed(with_item(items, MixedItem::from(scalar), operation))
            }
            Content::Mixed(items) => {
                Content::Mixed(with_item(items, MixedItem::from(scalar), operation))
            }
        };
    }

    fn add_child(&mut self, child: ElementNode, operation: Operation) {
        let current = std::mem::take(self);
        *self = match current {
            Content::Empty => Content::Complex(with_item(Vec::new(), child, operation)),
            Content::Simple(existing) => {
                let items = vec![MixedItem::from(existing)];
                Content::Mixed(with_item(items, MixedItem::Element(child), operation))
            }
            Content::Complex(children) => {
                Content::Complex(with_item(children, child, operation))
            }
            Content::Mixed(items) => {
                Content::Mixed(with_item(items, MixedItem::Element(child), operation))
            }
        };
    }
}

fn with_item<T>(mut items: Vec<T>, item: T, operation: Operation) -> Vec<T> {
    match operation {
        Operation::Append => items.push(item),
        Operation::Insert(index) => {
            assert!(
                index <= items.len(),
                "index out of bounds: expected <={}, found {index}",
                items.len()
            );
            items.insert(index, item);
        }
    }
    items
}

/// A single node of the XML tree: name, attributes, and content.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    pub name: String,
    pub attributes: Attributes,
    pub content: Content,
}

impl ElementNode {
    /// Creates an element with no attributes and empty content.
    pub fn empty(name: impl Into<String>) -> Self {
        ElementNode {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::Empty,
        }
    }

    /// Creates an element with simple text content.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        ElementNode {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::Simple(Scalar::Text(text.into())),
        }
    }

    /// Creates an element with a simple byte-blob payload.
    pub fn bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        ElementNode {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::Simple(Scalar::Bytes(bytes.into())),
        }
    }

    /// Creates an element holding only child elements.
    pub fn complex(name: impl Into<String>, children: Vec<ElementNode>) -> Self {
        ElementNode {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::Complex(children),
        }
    }

    /// Creates an element with interleaved text/bytes/element content.
    pub fn mixed(name: impl Into<String>, items: Vec<MixedItem>) -> Self {
        ElementNode {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::Mixed(items),
        }
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.content.append_text(text);
    }

    pub fn append_bytes(&mut self, bytes: impl Into<Vec<u8>>) {
        self.content.append_bytes(bytes);
    }

    pub fn append_child(&mut self, child: ElementNode) {
        self.content.append_child(child);
    }

    /// Sorts attributes and complex children by name, recursing through the
    /// whole subtree. Mixed content keeps its interleaving order; only the
    /// elements inside it are sorted internally.
    pub fn sort_by_keys(&mut self) {
        self.attributes.sort_keys();
        match &mut self.content {
            Content::Empty | Content::Simple(_) => {}
            Content::Complex(children) => {
                for child in children.iter_mut() {
                    child.sort_by_keys();
                }
                children.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
            }
            Content::Mixed(items) => {
                for item in items.iter_mut() {
                    if let MixedItem::Element(child) = item {
                        child.sort_by_keys();
                    }
                }
            }
        }
    }
}
