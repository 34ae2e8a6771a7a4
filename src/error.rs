//! Error types for XML encoding, writing, and reading.
//!
//! The taxonomy follows a strict recoverable/non-recoverable split:
//!
//! - **Formatter errors**: a value could not be rendered as (or parsed from)
//!   XML text — wrong boolean spelling, invalid base64, a non-representable
//!   float under the default reject strategy.
//! - **Placement errors**: a field routed to an attribute produced anything
//!   other than simple text content.
//! - **Parse errors**: malformed markup, with line/column position and a
//!   human-readable cause.
//! - **Engine invariant faults** are *not* represented here: frame-stack or
//!   field-path desynchronization indicates a bug, never bad input, and
//!   panics instead of returning an `Error`.
//!
//! Formatter and placement errors carry the field path at the point of
//! failure, rendered as a dot-joined string (`container.items.Index 2`).

use std::fmt;
use thiserror::Error;

/// Represents all recoverable errors that can occur while encoding values,
/// writing markup, or reading markup back into a tree.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing the encoded document
    #[error("IO error: {0}")]
    Io(String),

    /// A value could not be rendered as, or parsed from, XML text
    #[error("invalid value for {kind}: {detail}")]
    Format { kind: &'static str, detail: String },

    /// A non-representable float (NaN or ±infinity) was encountered while
    /// the reject strategy was active
    #[error("unable to encode non-representable float {value} at {path}")]
    FloatNotRepresentable { value: String, path: String },

    /// A field routed to an attribute lowered to something other than
    /// simple text content
    #[error("unable to encode the given complex value to an attribute at {path}")]
    AttributePlacement { path: String },

    /// Malformed markup, with position information
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A value kind the encoder does not support
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised by a `Serialize` implementation or strategy callback
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a formatter error for the named value kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xml_tree::Error;
    ///
    /// let err = Error::format("boolean", "expected true/false/1/0, found \"yes\"");
    /// assert!(err.to_string().contains("boolean"));
    /// ```
    pub fn format(kind: &'static str, detail: impl fmt::Display) -> Self {
        Error::Format {
            kind,
            detail: detail.to_string(),
        }
    }

    /// Creates the typed error for a NaN or infinite float rejected by the
    /// active float strategy.
    pub fn float_not_representable(value: impl fmt::Display, path: impl fmt::Display) -> Self {
        Error::FloatNotRepresentable {
            value: value.to_string(),
            path: path.to_string(),
        }
    }

    /// Creates the typed error for complex content routed to an attribute.
    pub fn attribute_placement(path: impl fmt::Display) -> Self {
        Error::AttributePlacement {
            path: path.to_string(),
        }
    }

    /// Creates a parse error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xml_tree::Error;
    ///
    /// let err = Error::parse(3, 14, "unexpected closing tag");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn parse(line: usize, column: usize, message: impl fmt::Display) -> Self {
        Error::Parse {
            line,
            column,
            message: message.to_string(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for stream writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
