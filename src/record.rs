//! Parsed log records with a derived, orderable timestamp
//!
//! Each input line is one JSON object carrying a mandatory `timestamp`
//! field in the fixed format `YYYY-MM-DD HH:MM:SS`. A record that cannot
//! produce a valid timestamp is not constructible.

use crate::error::ParseError;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Required wire format of the `timestamp` field (no timezone, no sub-seconds)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed log entry: the full JSON payload plus its derived timestamp
#[derive(Debug, Clone)]
pub struct Record {
    raw: Map<String, Value>,
    timestamp: NaiveDateTime,
}

impl Record {
    /// Parse one line of JSONL input into a record
    ///
    /// Fails when the line is not a JSON object, or when the `timestamp`
    /// field is missing, non-textual, or does not match
    /// [`TIMESTAMP_FORMAT`]. Pure, no side effects.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let raw: Map<String, Value> = serde_json::from_str(line)?;

        let timestamp = match raw.get("timestamp") {
            Some(Value::String(text)) => NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
                .map_err(|_| ParseError::BadTimestampFormat {
                    value: text.clone(),
                })?,
            Some(_) => return Err(ParseError::NonTextTimestamp),
            None => return Err(ParseError::MissingTimestamp),
        };

        Ok(Self { raw, timestamp })
    }

    /// The timestamp derived from the payload's `timestamp` field
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The full decoded payload
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Strict timestamp ordering: equal timestamps are "not before" in
    /// both directions, so callers must pick an explicit tie-break policy.
    pub fn is_before(&self, other: &Record) -> bool {
        self.timestamp < other.timestamp
    }
}

/// Canonical re-encoding of the full payload as one JSON line
///
/// Not guaranteed byte-identical to the original input line (serde_json
/// keeps map keys sorted), but semantic content is preserved and the
/// encoding is deterministic.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
