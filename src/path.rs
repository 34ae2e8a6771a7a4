//! Field-path segments and the path taken to the value currently encoding.
//!
//! The field path excludes the root segment: the root element has a name,
//! but the path to the root value is empty. Sequence positions carry an
//! ordinal and render as `Index N`; named fields render as their name.

use std::fmt;

/// One step of the field path: a field name, plus an ordinal for sequence
/// positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub ordinal: Option<usize>,
}

impl Segment {
    /// A named-field segment.
    pub fn key(name: impl Into<String>) -> Self {
        Segment {
            name: name.into(),
            ordinal: None,
        }
    }

    /// A sequence-position segment. `name` is the enclosing field's name,
    /// which becomes the element name of every sequence entry; only the
    /// ordinal shows in the rendered path.
    pub fn index(name: impl Into<String>, ordinal: usize) -> Self {
        Segment {
            name: name.into(),
            ordinal: Some(ordinal),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordinal {
            Some(ordinal) => write!(f, "Index {ordinal}"),
            None => f.write_str(&self.name),
        }
    }
}

/// The sequence of segments from the document root to the current position,
/// rendered dot-joined in error messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn new() -> Self {
        FieldPath::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
