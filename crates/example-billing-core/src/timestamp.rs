//! The service's timestamp wire format.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The one layout the service emits and accepts, e.g. `2016-07-11T10:28:50-04:00`.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// A point in time as the service encodes it.
///
/// Every date field on the wire is the quoted string
/// `YYYY-MM-DDThh:mm:ss±hh:mm`, and this type round-trips exactly that layout
/// rather than a generic ISO-8601 superset. Absent or `null` fields stay
/// `None` on the surrounding `Option<Timestamp>`; they never collapse to a
/// zero time. Equality compares instants, so the same moment expressed in two
/// offsets is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Parses the exact wire layout.
    ///
    /// This is the strict path: response decoding goes through it, and any
    /// deviation from the layout is surfaced as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTimestampError`] when `input` does not match the layout.
    pub fn parse(input: &str) -> Result<Self, ParseTimestampError> {
        DateTime::parse_from_str(input, WIRE_FORMAT)
            .map(Self)
            .map_err(|source| ParseTimestampError {
                input: input.to_owned(),
                source,
            })
    }

    /// Best-effort constructor for fixtures and hand-written values.
    ///
    /// Invalid input yields the zero time (Unix epoch, `+00:00`) instead of
    /// an error. Response decoding never takes this path; use
    /// [`Timestamp::parse`] when failures matter.
    #[must_use]
    pub fn lenient(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|_| Self(DateTime::UNIX_EPOCH.fixed_offset()))
    }

    /// The underlying instant.
    #[must_use]
    pub fn datetime(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format(WIRE_FORMAT).fmt(f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(WIRE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WireVisitor;

        impl Visitor<'_> for WireVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a timestamp like \"2016-07-11T10:28:50-04:00\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
                Timestamp::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(WireVisitor)
    }
}

/// Error from [`Timestamp::parse`] for input outside the wire layout.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid timestamp {input:?}: {source}")]
pub struct ParseTimestampError {
    /// The rejected input.
    pub input: String,
    /// The underlying parse failure.
    #[source]
    pub source: chrono::ParseError,
}
