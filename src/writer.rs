//! XML text output.
//!
//! [`XmlWriter`] walks a document through the [`XmlVisitor`] contract and
//! emits XML text to any [`std::io::Write`]. Output is compact by
//! default; with pretty-printing enabled, child elements land on their
//! own indented lines and scalar elements collapse to one line unless
//! the line would run long.
//!
//! Text payloads escape `&`, `<` and `>`; attribute values additionally
//! escape both quote characters. Byte payloads are emitted as CDATA
//! sections verbatim.

use std::io::Write;

use crate::document::{XmlDocument, XmlHeader, XmlVisitor};
use crate::error::{Error, Result};
use crate::node::{Attributes, Scalar};
use crate::options::XmlOptions;

/// A pretty-printed scalar element longer than this stays on one line no
/// more; the text moves to its own indented line.
const COLLAPSE_THRESHOLD: usize = 72;

/// Writes a document as XML text into `sink`.
///
/// # Errors
///
/// Returns an error when the sink fails or a payload cannot be
/// represented, such as CDATA bytes containing the `]]>` terminator.
pub fn write_document<W: Write>(
    sink: &mut W,
    document: &XmlDocument,
    options: &XmlOptions,
) -> Result<()> {
    let mut writer = XmlWriter::new(sink, options);
    document.accept(&mut writer)
}

/// Renders a document to an XML string.
///
/// # Errors
///
/// Returns an error when a payload cannot be represented; see
/// [`write_document`].
pub fn write_to_string(document: &XmlDocument, options: &XmlOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(&mut buffer, document, options)?;
    String::from_utf8(buffer).map_err(|error| Error::format("utf-8", error))
}

/// The visitor that serializes a document tree to XML text.
pub struct XmlWriter<'a, W: Write> {
    sink: &'a mut W,
    options: &'a XmlOptions,
    depth: usize,
}

impl<'a, W: Write> XmlWriter<'a, W> {
    pub fn new(sink: &'a mut W, options: &'a XmlOptions) -> Self {
        XmlWriter {
            sink,
            options,
            depth: 0,
        }
    }

    fn indent(&mut self) -> Result<()> {
        if self.options.pretty {
            let indent = self.options.indent.render(self.depth);
            self.sink.write_all(indent.as_bytes())?;
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        if self.options.pretty {
            self.sink.write_all(b"\n")?;
        }
        Ok(())
    }

    fn write_open_tag(&mut self, name: &str, attributes: &Attributes, empty: bool) -> Result<()> {
        write!(self.sink, "<{name}")?;
        for (key, value) in attributes {
            write!(self.sink, " {key}=\"{}\"", escape_attribute(value))?;
        }
        if empty {
            self.sink.write_all(b"/>")?;
        } else {
            self.sink.write_all(b">")?;
        }
        Ok(())
    }

    fn write_cdata(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.windows(3).any(|window| window == b"]]>") {
            return Err(Error::format("cdata", "byte payload contains \"]]>\""));
        }
        self.sink.write_all(b"<![CDATA[")?;
        self.sink.write_all(bytes)?;
        self.sink.write_all(b"]]>")?;
        Ok(())
    }
}

impl<W: Write> XmlVisitor for XmlWriter<'_, W> {
    fn enter_document(&mut self, header: Option<&XmlHeader>) -> Result<()> {
        let Some(header) = header else { return Ok(()) };
        if header.is_empty() {
            return Ok(());
        }
        self.sink.write_all(b"<?xml")?;
        if let Some(version) = &header.version {
            write!(self.sink, " version=\"{}\"", escape_attribute(version))?;
        }
        if let Some(encoding) = &header.encoding {
            write!(self.sink, " encoding=\"{}\"", escape_attribute(encoding))?;
        }
        if let Some(standalone) = &header.standalone {
            write!(self.sink, " standalone=\"{}\"", escape_attribute(standalone))?;
        }
        self.sink.write_all(b"?>")?;
        self.newline()
    }

    fn exit_document(&mut self) -> Result<()> {
        self.newline()
    }

    fn enter_element(&mut self, name: &str, attributes: &Attributes) -> Result<()> {
        self.indent()?;
        self.write_open_tag(name, attributes, false)?;
        self.newline()?;
        self.depth += 1;
        Ok(())
    }

    fn exit_element(&mut self, name: &str) -> Result<()> {
        self.depth -= 1;
        self.indent()?;
        write!(self.sink, "</{name}>")?;
        self.newline()
    }

    fn visit_scalar_element(
        &mut self,
        name: &str,
        attributes: &Attributes,
        scalar: Option<&Scalar>,
    ) -> Result<()> {
        self.indent()?;
        match scalar {
            None => {
                self.write_open_tag(name, attributes, true)?;
            }
            Some(Scalar::Text(text)) => {
                let escaped = escape_text(text);
                let collapse = !self.options.pretty
                    || self.options.indent.render(self.depth).len()
                        + name.len() * 2
                        + escaped.len()
                        + 5
                        <= COLLAPSE_THRESHOLD;
                if collapse {
                    self.write_open_tag(name, attributes, false)?;
                    self.sink.write_all(escaped.as_bytes())?;
                    write!(self.sink, "</{name}>")?;
                } else {
                    self.write_open_tag(name, attributes, false)?;
                    self.newline()?;
                    self.depth += 1;
                    self.indent()?;
                    self.sink.write_all(escaped.as_bytes())?;
                    self.newline()?;
                    self.depth -= 1;
                    self.indent()?;
                    write!(self.sink, "</{name}>")?;
                }
            }
            Some(Scalar::Bytes(bytes)) => {
                self.write_open_tag(name, attributes, false)?;
                self.write_cdata(bytes)?;
                write!(self.sink, "</{name}>")?;
            }
        }
        self.newline()
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        if self.options.pretty {
            self.indent()?;
            self.sink.write_all(escape_text(text).as_bytes())?;
            self.newline()
        } else {
            self.sink.write_all(escape_text(text).as_bytes())?;
            Ok(())
        }
    }

    fn visit_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.indent()?;
        self.write_cdata(bytes)?;
        self.newline()
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn escape_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ElementNode, MixedItem};
    use crate::options::Indent;

    fn compact(document: &XmlDocument) -> String {
        write_to_string(document, &XmlOptions::new()).unwrap()
    }

    fn pretty(document: &XmlDocument) -> String {
        write_to_string(document, &XmlOptions::pretty()).unwrap()
    }

    #[test]
    fn compact_scalar_element() {
        let document = XmlDocument::new(ElementNode::text("container", "true"));
        assert_eq!(compact(&document), "<container>true</container>");
    }

    #[test]
    fn empty_element_self_closes() {
        let document = XmlDocument::new(ElementNode::empty("nothing"));
        assert_eq!(compact(&document), "<nothing/>");
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let mut root = ElementNode::text("item", "x");
        root.attributes.insert("b".to_string(), "2".to_string());
        root.attributes.insert("a".to_string(), "1".to_string());
        let document = XmlDocument::new(root);
        assert_eq!(compact(&document), "<item b=\"2\" a=\"1\">x</item>");
    }

    #[test]
    fn header_renders_present_fields_only() {
        let document =
            XmlDocument::with_header(XmlHeader::default_header(), ElementNode::empty("e"));
        assert_eq!(
            compact(&document),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><e/>"
        );

        let empty = XmlDocument::with_header(XmlHeader::default(), ElementNode::empty("e"));
        assert_eq!(compact(&empty), "<e/>");
    }

    #[test]
    fn text_escaping() {
        let document = XmlDocument::new(ElementNode::text("t", "a & b < c > d \"quoted\""));
        assert_eq!(
            compact(&document),
            "<t>a &amp; b &lt; c &gt; d \"quoted\"</t>"
        );
    }

    #[test]
    fn attribute_escaping_covers_quotes() {
        let mut root = ElementNode::empty("t");
        root.attributes
            .insert("a".to_string(), "'<&>'\"".to_string());
        let document = XmlDocument::new(root);
        assert_eq!(
            compact(&document),
            "<t a=\"&apos;&lt;&amp;&gt;&apos;&quot;\"/>"
        );
    }

    #[test]
    fn bytes_render_as_cdata() {
        let document = XmlDocument::new(ElementNode::bytes("blob", *b"DATA"));
        assert_eq!(compact(&document), "<blob><![CDATA[DATA]]></blob>");
    }

    #[test]
    fn cdata_terminator_in_payload_is_an_error() {
        let document = XmlDocument::new(ElementNode::bytes("blob", *b"x]]>y"));
        assert!(write_to_string(&document, &XmlOptions::new()).is_err());
    }

    #[test]
    fn pretty_output_indents_children() {
        let document = XmlDocument::new(ElementNode::complex(
            "outer",
            vec![
                ElementNode::text("first", "1"),
                ElementNode::text("second", "2"),
            ],
        ));
        let options = XmlOptions::new().with_pretty(Indent::Spaces(2));
        assert_eq!(
            write_to_string(&document, &options).unwrap(),
            "<outer>\n  <first>1</first>\n  <second>2</second>\n</outer>\n"
        );
    }

    #[test]
    fn pretty_long_scalar_breaks_across_lines() {
        let long = "x".repeat(100);
        let document = XmlDocument::new(ElementNode::complex(
            "outer",
            vec![ElementNode::text("inner", long.clone())],
        ));
        let rendered = pretty(&document);
        assert!(rendered.contains(&format!("<inner>\n        {long}\n    </inner>")));
    }

    #[test]
    fn mixed_content_interleaves() {
        let document = XmlDocument::new(ElementNode::mixed(
            "container",
            vec![
                MixedItem::Text("foo".to_string()),
                MixedItem::Element(ElementNode::empty("bar")),
                MixedItem::Bytes(b"DATA".to_vec()),
            ],
        ));
        assert_eq!(
            compact(&document),
            "<container>foo<bar/><![CDATA[DATA]]></container>"
        );
    }
}
