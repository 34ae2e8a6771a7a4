//! Configuration for XML encoding.
//!
//! [`XmlOptions`] is a value object assembled with builder methods and
//! frozen once an encode call starts. It bundles the output formatting
//! flags (pretty-printing, key sorting) with the pluggable strategies:
//!
//! - [`TimestampStrategy`]: how a [`Timestamp`](crate::Timestamp) becomes text
//! - [`BytesStrategy`]: how a byte blob becomes text
//! - [`FloatStrategy`]: what happens to NaN and ±infinity
//! - [`KeyStrategy`]: rewriting of field names
//! - [`PlacementStrategy`]: attribute-vs-element routing per field
//!
//! ## Examples
//!
//! ```rust
//! use serde_xml_tree::{XmlOptions, Indent, TimestampStrategy};
//!
//! let options = XmlOptions::new()
//!     .with_pretty(Indent::Spaces(2))
//!     .with_sort_keys(true)
//!     .with_timestamps(TimestampStrategy::EpochMilliseconds);
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::path::{FieldPath, Segment};
use crate::ser::Encoder;
use crate::Result;

/// The indentation unit used by pretty-printed output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tabs,
}

impl Indent {
    pub(crate) fn render(&self, level: usize) -> String {
        match self {
            Indent::Spaces(count) => " ".repeat(count * level),
            Indent::Tabs => "\t".repeat(level),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(4)
    }
}

/// Where a keyed field's lowered value is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NodePlacement {
    /// Attach as an attribute of the enclosing element. Requires the
    /// lowered value to be simple text.
    Attribute,
    /// Attach as a child element. This is the default.
    #[default]
    Element,
}

/// Callback encoding a value through the engine; used by the `Custom`
/// strategy variants. The engine tracks the frame-stack depth around the
/// call, so a callback that encodes nothing yields an empty element.
pub type TimestampHook = Arc<dyn Fn(&DateTime<Utc>, &mut Encoder) -> Result<()> + Send + Sync>;

/// Callback encoding a byte blob through the engine; see [`TimestampHook`].
pub type BytesHook = Arc<dyn Fn(&[u8], &mut Encoder) -> Result<()> + Send + Sync>;

/// Callback rewriting a field name, given the path leading to the field
/// and the segment being resolved.
pub type KeyHook = Arc<dyn Fn(&FieldPath, &Segment) -> String + Send + Sync>;

/// Callback choosing attribute-vs-element placement for a field.
pub type PlacementHook = Arc<dyn Fn(&FieldPath, &Segment) -> NodePlacement + Send + Sync>;

/// The strategy used to lower [`Timestamp`](crate::Timestamp) values.
#[derive(Clone, Default)]
pub enum TimestampStrategy {
    /// Defer to the timestamp's own textual structure (RFC 3339).
    /// This is the default strategy.
    #[default]
    DeferredToTimestamp,
    /// Whole seconds since the UNIX epoch.
    EpochSeconds,
    /// Whole milliseconds since the UNIX epoch.
    EpochMilliseconds,
    /// RFC 3339 calendar text.
    Rfc3339,
    /// A `chrono` format string (`%Y-%m-%d` and friends).
    Format(String),
    /// A custom callback encoding the timestamp through the engine.
    Custom(TimestampHook),
}

impl fmt::Debug for TimestampStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampStrategy::DeferredToTimestamp => f.write_str("DeferredToTimestamp"),
            TimestampStrategy::EpochSeconds => f.write_str("EpochSeconds"),
            TimestampStrategy::EpochMilliseconds => f.write_str("EpochMilliseconds"),
            TimestampStrategy::Rfc3339 => f.write_str("Rfc3339"),
            TimestampStrategy::Format(format) => write!(f, "Format({format:?})"),
            TimestampStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The strategy used to lower byte blobs.
#[derive(Clone, Default)]
pub enum BytesStrategy {
    /// Base64 text. This is the default strategy.
    #[default]
    Base64,
    /// The blob's own bytes, rendered by the writer as a CDATA section.
    Raw,
    /// A custom callback encoding the blob through the engine.
    Custom(BytesHook),
}

impl fmt::Debug for BytesStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BytesStrategy::Base64 => f.write_str("Base64"),
            BytesStrategy::Raw => f.write_str("Raw"),
            BytesStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The strategy used for floats XML cannot represent (NaN, ±infinity).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FloatStrategy {
    /// Fault with a typed error carrying the field path.
    /// This is the default strategy.
    #[default]
    Reject,
    /// Substitute the configured strings verbatim.
    Substitute {
        positive_infinity: String,
        negative_infinity: String,
        nan: String,
    },
}

/// The strategy used to rewrite field names before they become element or
/// attribute names.
#[derive(Clone, Default)]
pub enum KeyStrategy {
    /// Use field names unchanged. This is the default strategy.
    #[default]
    Identity,
    /// Convert `camelCase` names to `snake_case`.
    SnakeCase,
    /// A custom callback keyed by the full field path.
    Custom(KeyHook),
}

impl fmt::Debug for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyStrategy::Identity => f.write_str("Identity"),
            KeyStrategy::SnakeCase => f.write_str("SnakeCase"),
            KeyStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The strategy deciding attribute-vs-element placement per keyed field.
#[derive(Clone, Default)]
pub enum PlacementStrategy {
    /// Every field becomes a child element. This is the default strategy.
    #[default]
    Deferred,
    /// A custom callback consulted per field path.
    Custom(PlacementHook),
}

impl PlacementStrategy {
    pub(crate) fn placement(&self, path: &FieldPath, segment: &Segment) -> NodePlacement {
        match self {
            PlacementStrategy::Deferred => NodePlacement::default(),
            PlacementStrategy::Custom(hook) => hook(path, segment),
        }
    }
}

impl fmt::Debug for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementStrategy::Deferred => f.write_str("Deferred"),
            PlacementStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Configuration options for XML encoding.
#[derive(Clone, Debug, Default)]
pub struct XmlOptions {
    pub pretty: bool,
    pub indent: Indent,
    pub sort_keys: bool,
    pub timestamps: TimestampStrategy,
    pub bytes: BytesStrategy,
    pub floats: FloatStrategy,
    pub keys: KeyStrategy,
    pub placement: PlacementStrategy,
}

impl XmlOptions {
    /// Creates default options: compact output, unsorted keys, base64
    /// blobs, rejected non-representable floats, unchanged field names,
    /// element placement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with the default indent.
    #[must_use]
    pub fn pretty() -> Self {
        XmlOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Enables pretty-printing with the given indentation unit.
    #[must_use]
    pub fn with_pretty(mut self, indent: Indent) -> Self {
        self.pretty = true;
        self.indent = indent;
        self
    }

    /// Sorts attributes and complex children by name, recursively, right
    /// before serialization.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, strategy: TimestampStrategy) -> Self {
        self.timestamps = strategy;
        self
    }

    #[must_use]
    pub fn with_bytes(mut self, strategy: BytesStrategy) -> Self {
        self.bytes = strategy;
        self
    }

    #[must_use]
    pub fn with_floats(mut self, strategy: FloatStrategy) -> Self {
        self.floats = strategy;
        self
    }

    #[must_use]
    pub fn with_keys(mut self, strategy: KeyStrategy) -> Self {
        self.keys = strategy;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, strategy: PlacementStrategy) -> Self {
        self.placement = strategy;
        self
    }
}

/// Splits a `camelCase` (or acronym-bearing) name into words and joins them
/// lowercased with underscores. `simpleURLTest` becomes `simple_url_test`.
pub(crate) fn convert_to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut words: Vec<String> = Vec::new();
    let mut word_start = 0;
    for position in 1..chars.len() {
        let previous = chars[position - 1];
        let current = chars[position];
        if current.is_uppercase() && !previous.is_uppercase() {
            words.push(chars[word_start..position].iter().collect());
            word_start = position;
        } else if !current.is_uppercase()
            && previous.is_uppercase()
            && position - word_start > 1
        {
            // End of an acronym run: the last uppercase starts the next word.
            words.push(chars[word_start..position - 1].iter().collect());
            word_start = position - 1;
        }
    }
    words.push(chars[word_start..].iter().collect());

    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_strategies() {
        let options = XmlOptions::new();
        assert!(!options.pretty);
        assert!(!options.sort_keys);
        assert!(matches!(
            options.timestamps,
            TimestampStrategy::DeferredToTimestamp
        ));
        assert!(matches!(options.bytes, BytesStrategy::Base64));
        assert_eq!(options.floats, FloatStrategy::Reject);
        assert!(matches!(options.keys, KeyStrategy::Identity));
    }

    #[test]
    fn builder_composes() {
        let options = XmlOptions::new()
            .with_pretty(Indent::Tabs)
            .with_sort_keys(true);
        assert!(options.pretty);
        assert_eq!(options.indent, Indent::Tabs);
        assert!(options.sort_keys);
    }

    #[test]
    fn snake_case_conversion() {
        assert_eq!(convert_to_snake_case(""), "");
        assert_eq!(convert_to_snake_case("simple"), "simple");
        assert_eq!(convert_to_snake_case("camelCase"), "camel_case");
        assert_eq!(convert_to_snake_case("simpleURLTest"), "simple_url_test");
        assert_eq!(convert_to_snake_case("myURL"), "my_url");
        assert_eq!(convert_to_snake_case("already_snake"), "already_snake");
        assert_eq!(convert_to_snake_case("ALLCAPS"), "allcaps");
    }

    #[test]
    fn indent_rendering() {
        assert_eq!(Indent::Spaces(4).render(2), "        ");
        assert_eq!(Indent::Tabs.render(3), "\t\t\t");
        assert_eq!(Indent::Spaces(2).render(0), "");
    }
}
