//! Helpers for pulling typed values out of raw wire records.
//!
//! The service emits records as flat JSON objects whose field names sometimes
//! embed a unit annotation (`Altitude(ft)`, `Speed(km/h)`). Keys carrying
//! `(`, `)` or `/` are reduced to their alphabetic characters before lookup;
//! all other keys pass through untouched.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::error::{FollowMeeError, Result};

/// Wire timestamp format, e.g. `2021-06-01T08:30:00-0400`
pub(crate) const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Strip a unit-annotated key down to its stable field name.
///
/// Only keys containing `(`, `)` or `/` are rewritten; the rewrite keeps
/// alphabetic characters and drops everything else.
pub(crate) fn normalize_key(key: &str) -> Cow<'_, str> {
    if key.contains(['(', ')', '/']) {
        Cow::Owned(key.chars().filter(|c| c.is_alphabetic()).collect())
    } else {
        Cow::Borrowed(key)
    }
}

/// Field accessor over one raw record from a `Data` array.
///
/// Every accessor removes the field from the map, so a field can be read
/// once; a missing or ill-typed value fails with an error naming the record
/// and the wire field.
pub(crate) struct RawRecord {
    record: &'static str,
    fields: Map<String, Value>,
}

impl RawRecord {
    pub(crate) fn new(record: &'static str, fields: Map<String, Value>) -> Self {
        Self { record, fields }
    }

    /// Build an accessor with unit-annotated keys normalized first
    pub(crate) fn normalized(record: &'static str, fields: Map<String, Value>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (normalize_key(&k).into_owned(), v))
            .collect();
        Self { record, fields }
    }

    fn take(&mut self, field: &'static str) -> Result<Value> {
        self.fields
            .remove(field)
            .ok_or(FollowMeeError::MissingField {
                record: self.record,
                field,
            })
    }

    fn invalid(&self, field: &'static str, reason: impl Into<String>) -> FollowMeeError {
        FollowMeeError::InvalidField {
            record: self.record,
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn string(&mut self, field: &'static str) -> Result<String> {
        match self.take(field)? {
            Value::String(s) => Ok(s),
            other => Err(self.invalid(field, format!("expected string, got {other}"))),
        }
    }

    pub(crate) fn float(&mut self, field: &'static str) -> Result<f64> {
        match self.take(field)? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| self.invalid(field, "number out of range")),
            Value::String(s) => s
                .parse()
                .map_err(|_| self.invalid(field, format!("expected number, got \"{s}\""))),
            other => Err(self.invalid(field, format!("expected number, got {other}"))),
        }
    }

    pub(crate) fn integer(&mut self, field: &'static str) -> Result<i32> {
        match self.take(field)? {
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| self.invalid(field, "integer out of range")),
            Value::String(s) => s
                .parse()
                .map_err(|_| self.invalid(field, format!("expected integer, got \"{s}\""))),
            other => Err(self.invalid(field, format!("expected integer, got {other}"))),
        }
    }

    /// A `"1"`/other string flag
    pub(crate) fn flag(&mut self, field: &'static str) -> Result<bool> {
        Ok(self.string(field)? == "1")
    }

    /// A percentage string like `"73%"`, returned as a fraction in [0, 1]
    pub(crate) fn battery(&mut self, field: &'static str) -> Result<f64> {
        let raw = self.string(field)?;
        let digits = raw.strip_suffix('%').unwrap_or(&raw);
        let percent: f64 = digits
            .parse()
            .map_err(|_| self.invalid(field, format!("expected percentage, got \"{raw}\"")))?;
        Ok(percent / 100.0)
    }

    /// A timestamp in the fixed `YYYY-MM-DDTHH:MM:SS±HHMM` wire format
    pub(crate) fn timestamp(&mut self, field: &'static str) -> Result<DateTime<FixedOffset>> {
        let raw = self.string(field)?;
        DateTime::parse_from_str(&raw, TIME_FORMAT)
            .map_err(|e| self.invalid(field, format!("\"{raw}\": {e}")))
    }
}
