//! Serialization of Rust values into XML document trees.
//!
//! This module provides the [`Encoder`] that lowers any
//! [`serde::Serialize`] value into an [`XmlDocument`], plus the
//! convenience entry points [`to_document`] and [`to_string`].
//!
//! The encoder keeps two pieces of state for the duration of one
//! top-level call: the field path from the root to the value currently
//! lowering, and a stack of in-progress elements ("frames"). Every value
//! gets exactly one frame: a named field pushes a frame, serializes into
//! it, pops it, and attaches it to the enclosing frame as a child element
//! or, under the placement strategy, as an attribute. Sequence entries
//! are named after the enclosing field and carry an ordinal in the path.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use serde_xml_tree::{to_string, XmlOptions};
//!
//! #[derive(Serialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let xml = to_string(&Point { x: 1, y: 2 }, "point", &XmlOptions::new()).unwrap();
//! assert_eq!(xml, "<point><x>1</x><y>2</y></point>");
//! ```

use serde::ser::{self, Serialize};

use crate::document::XmlDocument;
use crate::error::{Error, Result};
use crate::formatter::{
    BoolFormatter, BytesForm, BytesFormatter, FloatFormatter, TimestampForm, TimestampFormatter,
    XmlFormatter,
};
use crate::node::{Content, ElementNode, Scalar};
use crate::options::{
    convert_to_snake_case, BytesStrategy, FloatStrategy, KeyStrategy, NodePlacement,
    TimestampStrategy, XmlOptions,
};
use crate::path::{FieldPath, Segment};
use crate::timestamp::TIMESTAMP_TOKEN;
use crate::writer;

/// Serializes a value to an XML document tree rooted at `root_name`.
///
/// # Errors
///
/// Returns an error when a scalar cannot be lowered under the configured
/// strategies, for example a non-finite float under
/// [`FloatStrategy::Reject`] or a structured value routed to an attribute.
pub fn to_document<T>(value: &T, root_name: &str, options: &XmlOptions) -> Result<XmlDocument>
where
    T: ?Sized + Serialize,
{
    let mut encoder = Encoder::new(options.clone());
    encoder.push_frame(ElementNode::empty(root_name));
    value.serialize(&mut encoder)?;
    let mut root = encoder.pop_frame();
    assert!(
        encoder.frames.is_empty(),
        "frame stack not drained after root value"
    );
    if options.sort_keys {
        root.sort_by_keys();
    }
    Ok(XmlDocument::new(root))
}

/// Serializes a value to XML text rooted at `root_name`.
///
/// # Errors
///
/// Returns an error when lowering fails; see [`to_document`].
pub fn to_string<T>(value: &T, root_name: &str, options: &XmlOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let document = to_document(value, root_name, options)?;
    writer::write_to_string(&document, options)
}

/// Serializes a value as XML text into an [`std::io::Write`].
///
/// # Errors
///
/// Returns an error when lowering fails or the underlying writer does.
pub fn to_writer<W, T>(
    writer: &mut W,
    value: &T,
    root_name: &str,
    options: &XmlOptions,
) -> Result<()>
where
    W: std::io::Write,
    T: ?Sized + Serialize,
{
    let document = to_document(value, root_name, options)?;
    writer::write_document(writer, &document, options)
}

macro_rules! encode_float {
    ($method:ident, $float:ty) => {
        fn $method(&mut self, value: $float) -> Result<()> {
            if !value.is_finite() {
                match self.options.floats.clone() {
                    FloatStrategy::Reject => {
                        return Err(Error::float_not_representable(
                            FloatFormatter::<$float>::new().format(&value)?,
                            &self.path,
                        ));
                    }
                    FloatStrategy::Substitute {
                        positive_infinity,
                        negative_infinity,
                        nan,
                    } => {
                        let substitute = if value.is_nan() {
                            nan
                        } else if value > 0.0 {
                            positive_infinity
                        } else {
                            negative_infinity
                        };
                        return self.encode_text(substitute);
                    }
                }
            }
            let text = FloatFormatter::<$float>::new().format(&value)?;
            self.encode_text(text)
        }
    };
}

/// Lowers [`serde::Serialize`] values into an XML element tree.
///
/// One encoder lives for one top-level call. Custom strategy callbacks
/// receive it by mutable reference and feed values back through
/// [`Encoder::encode`] or [`Encoder::write_text`].
pub struct Encoder {
    options: XmlOptions,
    path: FieldPath,
    frames: Vec<ElementNode>,
}

impl Encoder {
    fn new(options: XmlOptions) -> Self {
        Encoder {
            options,
            path: FieldPath::new(),
            frames: Vec::new(),
        }
    }

    /// Encodes a value into the current position, as a custom strategy
    /// callback would. A callback that encodes nothing leaves the
    /// position empty.
    ///
    /// # Errors
    ///
    /// Returns an error when lowering the value fails.
    pub fn encode<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self)
    }

    /// Writes literal text into the current position.
    pub fn write_text(&mut self, text: impl Into<String>) {
        self.current_frame().append_text(text);
    }

    fn push_frame(&mut self, frame: ElementNode) {
        self.frames.push(frame);
        // An open frame count running ahead of the path means a surface
        // pushed more than one frame for a value.
        assert!(
            self.frames.len() <= self.path.len() + 1,
            "frame stack depth {} exceeds field path depth {}",
            self.frames.len(),
            self.path.len()
        );
    }

    fn pop_frame(&mut self) -> ElementNode {
        match self.frames.pop() {
            Some(frame) => frame,
            None => panic!("frame stack popped while empty"),
        }
    }

    fn current_frame(&mut self) -> &mut ElementNode {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => panic!("no open frame"),
        }
    }

    /// Applies the key strategy to a segment. Ordinal segments reuse the
    /// enclosing field's already-resolved name.
    fn resolve(&self, segment: &Segment) -> String {
        if segment.ordinal.is_some() {
            return segment.name.clone();
        }
        match &self.options.keys {
            KeyStrategy::Identity => segment.name.clone(),
            KeyStrategy::SnakeCase => convert_to_snake_case(&segment.name),
            KeyStrategy::Custom(hook) => hook(&self.path, segment),
        }
    }

    /// Material already written into the current frame: attributes plus
    /// scalar payloads, children, or mixed items. Sequence ordinals are
    /// derived from this count.
    fn current_count(&mut self) -> usize {
        let frame = self.current_frame();
        frame.attributes.len() + frame.content.len()
    }

    /// Lowers one value under its path segment: push the segment and a
    /// fresh frame, serialize, then pop both and attach the finished
    /// frame to the enclosing one. The path is restored on every exit.
    fn encode_value<T>(&mut self, segment: Segment, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let name = self.resolve(&segment);
        let placement = if segment.ordinal.is_some() {
            NodePlacement::Element
        } else {
            self.options.placement.placement(&self.path, &segment)
        };

        self.path.push(segment);
        self.push_frame(ElementNode::empty(name.as_str()));
        let outcome = value.serialize(&mut *self);
        let frame = self.pop_frame();
        let segment = match self.path.pop() {
            Some(segment) => segment,
            None => panic!("field path popped while empty"),
        };
        outcome?;

        match placement {
            NodePlacement::Element => {
                self.current_frame().append_child(frame);
                Ok(())
            }
            NodePlacement::Attribute => match frame.content {
                Content::Simple(Scalar::Text(text)) if frame.attributes.is_empty() => {
                    self.current_frame().attributes.insert(name, text);
                    Ok(())
                }
                // An absent value routed to an attribute simply omits it.
                Content::Empty if frame.attributes.is_empty() => Ok(()),
                _ => Err(Error::attribute_placement(located(&self.path, &segment))),
            },
        }
    }

    fn encode_text(&mut self, text: String) -> Result<()> {
        self.current_frame().append_text(text);
        Ok(())
    }

    encode_float!(encode_f32, f32);
    encode_float!(encode_f64, f64);

    fn encode_timestamp(&mut self, text: &str) -> Result<()> {
        let strategy = self.options.timestamps.clone();
        if let TimestampStrategy::DeferredToTimestamp = strategy {
            // The timestamp's own textual structure is the interchange
            // form verbatim.
            return self.encode_text(text.to_string());
        }
        let instant = TimestampFormatter::new(TimestampForm::Rfc3339).parse(text)?;
        match strategy {
            TimestampStrategy::DeferredToTimestamp => unreachable!(),
            TimestampStrategy::EpochSeconds => {
                let text = TimestampFormatter::new(TimestampForm::EpochSeconds).format(&instant)?;
                self.encode_text(text)
            }
            TimestampStrategy::EpochMilliseconds => {
                let text =
                    TimestampFormatter::new(TimestampForm::EpochMilliseconds).format(&instant)?;
                self.encode_text(text)
            }
            TimestampStrategy::Rfc3339 => {
                let text = TimestampFormatter::new(TimestampForm::Rfc3339).format(&instant)?;
                self.encode_text(text)
            }
            TimestampStrategy::Format(format) => {
                let text =
                    TimestampFormatter::new(TimestampForm::Format(format)).format(&instant)?;
                self.encode_text(text)
            }
            TimestampStrategy::Custom(hook) => hook(&instant, self),
        }
    }
}

/// The path of a field, including its own segment; used in errors raised
/// after the segment has been popped.
fn located(path: &FieldPath, segment: &Segment) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

impl<'a> ser::Serializer for &'a mut Encoder {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqEncoder<'a>;
    type SerializeTuple = SeqEncoder<'a>;
    type SerializeTupleStruct = SeqEncoder<'a>;
    type SerializeTupleVariant = VariantEncoder<'a>;
    type SerializeMap = MapEncoder<'a>;
    type SerializeStruct = StructEncoder<'a>;
    type SerializeStructVariant = VariantEncoder<'a>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        let text = BoolFormatter.format(&v)?;
        self.encode_text(text)
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.encode_f32(v)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        self.encode_f64(v)
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.encode_text(v.to_string())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        match self.options.bytes.clone() {
            BytesStrategy::Base64 => {
                let text = BytesFormatter::new(BytesForm::Base64).format(&v.to_vec())?;
                self.encode_text(text)
            }
            BytesStrategy::Raw => {
                self.current_frame().append_bytes(v);
                Ok(())
            }
            BytesStrategy::Custom(hook) => hook(v, self),
        }
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        // Absent values leave their element empty.
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.encode_text(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        if name == TIMESTAMP_TOKEN {
            let text = value.serialize(TextCapture)?;
            return self.encode_timestamp(&text);
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.encode_value(Segment::key(variant), value)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqEncoder { encoder: self })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(SeqEncoder { encoder: self })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(SeqEncoder { encoder: self })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        VariantEncoder::open(self, variant)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapEncoder {
            encoder: self,
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructEncoder { encoder: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        VariantEncoder::open(self, variant)
    }
}

/// The unkeyed capture surface. Every entry is lowered under an ordinal
/// segment and named after the enclosing field, so a sequence field
/// `items` becomes `<items><items>..</items><items>..</items></items>`.
pub struct SeqEncoder<'a> {
    encoder: &'a mut Encoder,
}

impl SeqEncoder<'_> {
    fn encode_entry<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let ordinal = self.encoder.current_count();
        let name = self.encoder.current_frame().name.clone();
        self.encoder
            .encode_value(Segment::index(name, ordinal), value)
    }
}

impl ser::SerializeSeq for SeqEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.encode_entry(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTuple for SeqEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.encode_entry(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for SeqEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.encode_entry(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// The keyed capture surface for maps. Keys are captured as text through
/// [`MapKeyEncoder`] before their values lower.
pub struct MapEncoder<'a> {
    encoder: &'a mut Encoder,
    pending_key: Option<String>,
}

impl ser::SerializeMap for MapEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key.serialize(MapKeyEncoder)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("map value serialized before its key"))?;
        self.encoder.encode_value(Segment::key(key), value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// The keyed capture surface for structs.
pub struct StructEncoder<'a> {
    encoder: &'a mut Encoder,
}

impl ser::SerializeStruct for StructEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.encoder.encode_value(Segment::key(key), value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Capture surface for tuple and struct enum variants: the variant name
/// becomes an extra wrapper element around the variant's payload.
pub struct VariantEncoder<'a> {
    encoder: &'a mut Encoder,
}

impl<'a> VariantEncoder<'a> {
    fn open(encoder: &'a mut Encoder, variant: &'static str) -> Result<Self> {
        encoder.path.push(Segment::key(variant));
        encoder.push_frame(ElementNode::empty(variant));
        Ok(VariantEncoder { encoder })
    }

    fn close(self) -> Result<()> {
        let frame = self.encoder.pop_frame();
        self.encoder.path.pop();
        self.encoder.current_frame().append_child(frame);
        Ok(())
    }
}

impl ser::SerializeTupleVariant for VariantEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let ordinal = self.encoder.current_count();
        let name = self.encoder.current_frame().name.clone();
        self.encoder
            .encode_value(Segment::index(name, ordinal), value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl ser::SerializeStructVariant for VariantEncoder<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.encoder.encode_value(Segment::key(key), value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

/// Serializer that renders map keys as plain text. Only scalar keys are
/// accepted; a structured key has no XML name.
struct MapKeyEncoder;

macro_rules! key_to_string {
    ($method:ident, $ty:ty) => {
        fn $method(self, v: $ty) -> Result<String> {
            Ok(v.to_string())
        }
    };
}

impl ser::Serializer for MapKeyEncoder {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    key_to_string!(serialize_bool, bool);
    key_to_string!(serialize_i8, i8);
    key_to_string!(serialize_i16, i16);
    key_to_string!(serialize_i32, i32);
    key_to_string!(serialize_i64, i64);
    key_to_string!(serialize_u8, u8);
    key_to_string!(serialize_u16, u16);
    key_to_string!(serialize_u32, u32);
    key_to_string!(serialize_u64, u64);
    key_to_string!(serialize_char, char);

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(Error::unsupported_type("float map key"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(Error::unsupported_type("float map key"))
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(Error::unsupported_type("byte map key"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(Error::unsupported_type("optional map key"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(Error::unsupported_type("unit map key"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(Error::unsupported_type("unit struct map key"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variant map key"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type("sequence map key"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("tuple map key"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type("tuple struct map key"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variant map key"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("map map key"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type("struct map key"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variant map key"))
    }
}

/// Serializer that extracts exactly one string, used to unwrap the
/// [`Timestamp`](crate::Timestamp) interchange form.
struct TextCapture;

impl ser::Serializer for TextCapture {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_char(self, _v: char) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<String> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type("expected text"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("expected text"))
    }
}
