//! Bidirectional scalar formatters.
//!
//! Every scalar crossing the XML boundary goes through an
//! [`XmlFormatter`]: `format` lowers a typed value to text, `parse`
//! recovers it. Each formatter owns the full spelling contract for its
//! type, including the lenient input forms `parse` accepts.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use rust_decimal::Decimal;
use url::Url;

use crate::error::{Error, Result};

/// A bidirectional mapping between a scalar type and its XML text form.
pub trait XmlFormatter {
    type Value;

    /// Parses the XML text form back into the typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when the text is not a valid spelling.
    fn parse(&self, text: &str) -> Result<Self::Value>;

    /// Lowers the typed value to its XML text form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when the value has no text form under
    /// this formatter's contract.
    fn format(&self, value: &Self::Value) -> Result<String>;
}

/// Booleans as `true`/`false`, also accepting `1`/`0` and any casing of
/// the word forms on input.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolFormatter;

impl XmlFormatter for BoolFormatter {
    type Value = bool;

    fn parse(&self, text: &str) -> Result<bool> {
        match text.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Error::format("bool", format!("invalid boolean {text:?}"))),
        }
    }

    fn format(&self, value: &bool) -> Result<String> {
        Ok(if *value { "true" } else { "false" }.to_string())
    }
}

/// Integers in plain decimal, for any primitive integer width.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerFormatter<T> {
    _marker: PhantomData<T>,
}

impl<T> IntegerFormatter<T> {
    #[must_use]
    pub fn new() -> Self {
        IntegerFormatter {
            _marker: PhantomData,
        }
    }
}

impl<T> XmlFormatter for IntegerFormatter<T>
where
    T: Display + FromStr,
{
    type Value = T;

    fn parse(&self, text: &str) -> Result<T> {
        text.parse()
            .map_err(|_| Error::format("integer", format!("invalid integer {text:?}")))
    }

    fn format(&self, value: &T) -> Result<String> {
        Ok(value.to_string())
    }
}

/// Binary floats with the spellings `INF`, `-INF` and `NaN` for the
/// non-finite values.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatFormatter<T> {
    _marker: PhantomData<T>,
}

impl<T> FloatFormatter<T> {
    #[must_use]
    pub fn new() -> Self {
        FloatFormatter {
            _marker: PhantomData,
        }
    }
}

macro_rules! float_formatter {
    ($float:ty) => {
        impl XmlFormatter for FloatFormatter<$float> {
            type Value = $float;

            fn parse(&self, text: &str) -> Result<$float> {
                match text {
                    "INF" => Ok(<$float>::INFINITY),
                    "-INF" => Ok(<$float>::NEG_INFINITY),
                    "NaN" => Ok(<$float>::NAN),
                    other => other
                        .parse()
                        .map_err(|_| Error::format("float", format!("invalid float {other:?}"))),
                }
            }

            fn format(&self, value: &$float) -> Result<String> {
                if value.is_nan() {
                    Ok("NaN".to_string())
                } else if *value == <$float>::INFINITY {
                    Ok("INF".to_string())
                } else if *value == <$float>::NEG_INFINITY {
                    Ok("-INF".to_string())
                } else {
                    Ok(value.to_string())
                }
            }
        }
    };
}

float_formatter!(f32);
float_formatter!(f64);

/// Arbitrary-precision decimals in plain decimal notation. Non-finite
/// spellings are rejected: a decimal has no NaN or infinity.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecimalFormatter;

impl XmlFormatter for DecimalFormatter {
    type Value = Decimal;

    fn parse(&self, text: &str) -> Result<Decimal> {
        match text {
            "INF" | "-INF" | "NaN" => Err(Error::format(
                "decimal",
                format!("decimal cannot represent {text}"),
            )),
            other => other
                .parse()
                .map_err(|_| Error::format("decimal", format!("invalid decimal {other:?}"))),
        }
    }

    fn format(&self, value: &Decimal) -> Result<String> {
        Ok(value.to_string())
    }
}

/// Strings pass through unchanged; escaping is the writer's concern.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringFormatter;

impl XmlFormatter for StringFormatter {
    type Value = String;

    fn parse(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn format(&self, value: &String) -> Result<String> {
        Ok(value.clone())
    }
}

/// URIs round-tripped through [`url::Url`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UriFormatter;

impl XmlFormatter for UriFormatter {
    type Value = Url;

    fn parse(&self, text: &str) -> Result<Url> {
        Url::parse(text).map_err(|error| Error::format("uri", error.to_string()))
    }

    fn format(&self, value: &Url) -> Result<String> {
        Ok(value.to_string())
    }
}

/// The text form a [`TimestampFormatter`] speaks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TimestampForm {
    /// Whole seconds since the UNIX epoch.
    EpochSeconds,
    /// Whole milliseconds since the UNIX epoch.
    EpochMilliseconds,
    /// RFC 3339 calendar text. This is the default form.
    #[default]
    Rfc3339,
    /// A `chrono` format string. Parsing requires the string to pin the
    /// timestamp down to an unambiguous UTC instant.
    Format(String),
}

/// UTC timestamps in one of the [`TimestampForm`] spellings.
#[derive(Clone, Debug, Default)]
pub struct TimestampFormatter {
    form: TimestampForm,
}

impl TimestampFormatter {
    #[must_use]
    pub fn new(form: TimestampForm) -> Self {
        TimestampFormatter { form }
    }
}

impl XmlFormatter for TimestampFormatter {
    type Value = DateTime<Utc>;

    fn parse(&self, text: &str) -> Result<DateTime<Utc>> {
        match &self.form {
            TimestampForm::EpochSeconds => {
                let seconds: i64 = text.parse().map_err(|_| {
                    Error::format("timestamp", format!("invalid epoch seconds {text:?}"))
                })?;
                Utc.timestamp_opt(seconds, 0).single().ok_or_else(|| {
                    Error::format("timestamp", format!("epoch seconds out of range: {seconds}"))
                })
            }
            TimestampForm::EpochMilliseconds => {
                let millis: i64 = text.parse().map_err(|_| {
                    Error::format("timestamp", format!("invalid epoch milliseconds {text:?}"))
                })?;
                Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
                    Error::format(
                        "timestamp",
                        format!("epoch milliseconds out of range: {millis}"),
                    )
                })
            }
            TimestampForm::Rfc3339 => DateTime::parse_from_rfc3339(text)
                .map(|instant| instant.with_timezone(&Utc))
                .map_err(|error| Error::format("timestamp", error.to_string())),
            TimestampForm::Format(format) => DateTime::parse_from_str(text, format)
                .map(|instant| instant.with_timezone(&Utc))
                .map_err(|error| Error::format("timestamp", error.to_string())),
        }
    }

    fn format(&self, value: &DateTime<Utc>) -> Result<String> {
        match &self.form {
            TimestampForm::EpochSeconds => Ok(value.timestamp().to_string()),
            TimestampForm::EpochMilliseconds => Ok(value.timestamp_millis().to_string()),
            TimestampForm::Rfc3339 => Ok(value.to_rfc3339_opts(SecondsFormat::Secs, true)),
            TimestampForm::Format(format) => Ok(value.format(format).to_string()),
        }
    }
}

/// The text form a [`BytesFormatter`] speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BytesForm {
    /// Standard base64 with padding. This is the default form.
    #[default]
    Base64,
    /// The blob's own bytes interpreted as UTF-8.
    Raw,
}

/// Byte blobs as base64 or raw UTF-8 text.
#[derive(Clone, Copy, Debug, Default)]
pub struct BytesFormatter {
    form: BytesForm,
}

impl BytesFormatter {
    #[must_use]
    pub fn new(form: BytesForm) -> Self {
        BytesFormatter { form }
    }
}

impl XmlFormatter for BytesFormatter {
    type Value = Vec<u8>;

    fn parse(&self, text: &str) -> Result<Vec<u8>> {
        match self.form {
            BytesForm::Base64 => BASE64
                .decode(text)
                .map_err(|error| Error::format("bytes", error.to_string())),
            BytesForm::Raw => Ok(text.as_bytes().to_vec()),
        }
    }

    fn format(&self, value: &Vec<u8>) -> Result<String> {
        match self.form {
            BytesForm::Base64 => Ok(BASE64.encode(value)),
            BytesForm::Raw => String::from_utf8(value.clone())
                .map_err(|error| Error::format("bytes", error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_spellings() {
        let formatter = BoolFormatter;
        assert!(formatter.parse("true").unwrap());
        assert!(formatter.parse("1").unwrap());
        assert!(!formatter.parse("false").unwrap());
        assert!(!formatter.parse("0").unwrap());
        assert!(formatter.parse("TRUE").unwrap());
        assert!(formatter.parse("yes").is_err());
        assert_eq!(formatter.format(&true).unwrap(), "true");
        assert_eq!(formatter.format(&false).unwrap(), "false");
    }

    #[test]
    fn integer_round_trip() {
        let formatter = IntegerFormatter::<i64>::new();
        assert_eq!(formatter.parse("-42").unwrap(), -42);
        assert_eq!(formatter.format(&i64::MIN).unwrap(), i64::MIN.to_string());
        assert!(formatter.parse("4.2").is_err());
        assert!(formatter.parse("").is_err());
    }

    #[test]
    fn float_non_finite_spellings() {
        let formatter = FloatFormatter::<f64>::new();
        assert_eq!(formatter.format(&f64::INFINITY).unwrap(), "INF");
        assert_eq!(formatter.format(&f64::NEG_INFINITY).unwrap(), "-INF");
        assert_eq!(formatter.format(&f64::NAN).unwrap(), "NaN");
        assert_eq!(formatter.parse("INF").unwrap(), f64::INFINITY);
        assert_eq!(formatter.parse("-INF").unwrap(), f64::NEG_INFINITY);
        assert!(formatter.parse("NaN").unwrap().is_nan());
        assert_eq!(formatter.parse("1.5").unwrap(), 1.5);
    }

    #[test]
    fn decimal_rejects_non_finite() {
        let formatter = DecimalFormatter;
        assert!(formatter.parse("INF").is_err());
        assert!(formatter.parse("-INF").is_err());
        assert!(formatter.parse("NaN").is_err());
        let value: Decimal = "3.1415".parse().unwrap();
        assert_eq!(formatter.format(&value).unwrap(), "3.1415");
        assert_eq!(formatter.parse("3.1415").unwrap(), value);
    }

    #[test]
    fn uri_round_trip() {
        let formatter = UriFormatter;
        let uri = formatter.parse("https://example.com/path?q=1").unwrap();
        assert_eq!(
            formatter.format(&uri).unwrap(),
            "https://example.com/path?q=1"
        );
        assert!(formatter.parse("not a uri").is_err());
    }

    #[test]
    fn timestamp_epoch_forms() {
        let seconds = TimestampFormatter::new(TimestampForm::EpochSeconds);
        let instant = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
        assert_eq!(seconds.format(&instant).unwrap(), "1000000000");
        assert_eq!(seconds.parse("1000000000").unwrap(), instant);

        let millis = TimestampFormatter::new(TimestampForm::EpochMilliseconds);
        assert_eq!(millis.format(&instant).unwrap(), "1000000000000");
        assert_eq!(millis.parse("1000000000000").unwrap(), instant);
    }

    #[test]
    fn timestamp_rfc3339() {
        let formatter = TimestampFormatter::new(TimestampForm::Rfc3339);
        let instant = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        assert_eq!(formatter.format(&instant).unwrap(), "2024-02-29T12:00:00Z");
        assert_eq!(formatter.parse("2024-02-29T12:00:00Z").unwrap(), instant);
        assert_eq!(
            formatter.parse("2024-02-29T13:00:00+01:00").unwrap(),
            instant
        );
        assert!(formatter.parse("2024-02-30T00:00:00Z").is_err());
    }

    #[test]
    fn bytes_base64() {
        let formatter = BytesFormatter::new(BytesForm::Base64);
        assert_eq!(formatter.format(&b"hello".to_vec()).unwrap(), "aGVsbG8=");
        assert_eq!(formatter.parse("aGVsbG8=").unwrap(), b"hello".to_vec());
        assert!(formatter.parse("not base64!!").is_err());
    }

    #[test]
    fn bytes_raw_requires_utf8() {
        let formatter = BytesFormatter::new(BytesForm::Raw);
        assert_eq!(formatter.format(&b"plain".to_vec()).unwrap(), "plain");
        assert!(formatter.format(&vec![0xff, 0xfe]).is_err());
    }
}
