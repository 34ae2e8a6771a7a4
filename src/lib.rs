//! # serde_xml_tree
//!
//! A Serde-based XML encoder built around an explicit document tree.
//!
//! ## How it works
//!
//! Values are not written to text directly. They first lower into an
//! [`XmlDocument`]: a tree of [`ElementNode`]s, each with a name, an
//! ordered attribute map and a content slot that grows from empty
//! through simple text or bytes to child elements or mixed content.
//! The tree is then handed to the writer, or inspected and reshaped
//! in between. The reader goes the other way: XML text back into the
//! same tree.
//!
//! ## Key Features
//!
//! - **Serde Compatible**: Works with existing Rust types via
//!   `#[derive(Serialize)]`
//! - **Explicit Tree**: The intermediate document is a public type you
//!   can build, inspect and rewrite
//! - **Pluggable Strategies**: Timestamps, byte blobs, non-finite
//!   floats, field-name rewriting and attribute placement are all
//!   configurable per encode call
//! - **Mixed Content**: Text, CDATA byte payloads and child elements
//!   interleave the way real-world XML does
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_xml_tree = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization
//!
//! ```rust
//! use serde::Serialize;
//! use serde_xml_tree::{to_string, XmlOptions};
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let xml = to_string(&user, "user", &XmlOptions::new()).unwrap();
//! assert_eq!(
//!     xml,
//!     "<user><id>123</id><name>Alice</name><active>true</active></user>"
//! );
//! ```
//!
//! ### Attributes via the placement strategy
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use serde::Serialize;
//! use serde_xml_tree::{to_string, NodePlacement, PlacementStrategy, XmlOptions};
//!
//! #[derive(Serialize)]
//! struct Item {
//!     id: u32,
//!     label: String,
//! }
//!
//! let options = XmlOptions::new().with_placement(PlacementStrategy::Custom(Arc::new(
//!     |_path, segment| {
//!         if segment.name == "id" {
//!             NodePlacement::Attribute
//!         } else {
//!             NodePlacement::Element
//!         }
//!     },
//! )));
//!
//! let item = Item { id: 7, label: "bolt".to_string() };
//! let xml = to_string(&item, "item", &options).unwrap();
//! assert_eq!(xml, "<item id=\"7\"><label>bolt</label></item>");
//! ```
//!
//! ### Reading XML back into the tree
//!
//! ```rust
//! use serde_xml_tree::read_element;
//!
//! let root = read_element("<note priority=\"high\">call back</note>").unwrap();
//! assert_eq!(root.name, "note");
//! assert_eq!(root.content.as_text(), Some("call back"));
//! ```

pub mod document;
pub mod error;
pub mod formatter;
pub mod node;
pub mod options;
pub mod path;
pub mod reader;
pub mod ser;
pub mod timestamp;
pub mod writer;

pub use document::{XmlDocument, XmlHeader, XmlVisitor};
pub use error::{Error, Result};
pub use node::{Attributes, Content, ElementNode, MixedItem, Scalar};
pub use options::{
    BytesHook, BytesStrategy, FloatStrategy, Indent, KeyHook, KeyStrategy, NodePlacement,
    PlacementHook, PlacementStrategy, TimestampHook, TimestampStrategy, XmlOptions,
};
pub use path::{FieldPath, Segment};
pub use reader::{read_document, read_element};
pub use ser::{to_document, to_string, to_writer, Encoder};
pub use timestamp::Timestamp;
pub use writer::{write_document, write_to_string, XmlWriter};

use serde::Serialize;

/// Serializes a value to pretty-printed XML text rooted at `root_name`.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_xml_tree::to_string_pretty;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let xml = to_string_pretty(&Point { x: 1, y: 2 }, "point").unwrap();
/// assert_eq!(xml, "<point>\n    <x>1</x>\n    <y>2</y>\n</point>\n");
/// ```
///
/// # Errors
///
/// Returns an error when lowering fails; see [`to_document`].
pub fn to_string_pretty<T>(value: &T, root_name: &str) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string(value, root_name, &XmlOptions::pretty())
}
