//! The [`Timestamp`] wrapper.
//!
//! Serde erases concrete types, so the engine cannot tell a plain
//! `chrono::DateTime<Utc>` apart from any other struct: encoded directly
//! it takes the delegate-to-own-structure path and lowers as RFC 3339
//! text. Wrapping it in [`Timestamp`] marks the value for the configured
//! [`TimestampStrategy`](crate::TimestampStrategy) instead. The wrapper
//! serializes as a newtype struct with a name no ordinary type collides
//! with; the engine intercepts that name.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, Serializer};

/// The newtype-struct name the engine intercepts.
pub(crate) const TIMESTAMP_TOKEN: &str = "$serde_xml_tree::Timestamp";

/// A UTC instant that opts into the encoder's timestamp strategy.
///
/// ## Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use serde::Serialize;
/// use serde_xml_tree::{to_string, Timestamp, TimestampStrategy, XmlOptions};
///
/// #[derive(Serialize)]
/// struct Event {
///     occurred: Timestamp,
/// }
///
/// let event = Event {
///     occurred: Timestamp(Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap()),
/// };
/// let options = XmlOptions::new().with_timestamps(TimestampStrategy::EpochSeconds);
/// let xml = to_string(&event, "event", &options).unwrap();
/// assert!(xml.contains("<occurred>1000000000</occurred>"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The wrapped instant.
    #[must_use]
    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // RFC 3339 is the interchange form; the engine re-parses it when a
        // strategy needs the instant back.
        let text = self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        serializer.serialize_newtype_struct(TIMESTAMP_TOKEN, &text)
    }
}
