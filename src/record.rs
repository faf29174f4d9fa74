use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{details::Details, write_adaptor::WriteAdaptor};

/// Keys that are present on every record and can never be shadowed by
/// caller-supplied details.
const FIXED_FIELDS: [&str; 3] = ["timestamp", "level", "message"];

/// A single structured log entry.
///
/// A record borrows its inputs, captures the current instant at construction
/// and is discarded as soon as it has been rendered; it never outlives the
/// emit call that created it.
pub(crate) struct LogRecord<'a> {
    timestamp: DateTime<Utc>,
    level: Cow<'a, str>,
    message: &'a str,
    details: &'a Details,
}

impl<'a> LogRecord<'a> {
    pub(crate) fn new(level: &'a str, message: &'a str, details: &'a Details) -> Self {
        Self {
            timestamp: Utc::now(),
            level: normalize_level(level),
            message,
            details,
        }
    }

    /// Appends the record to `buf` as one JSON line, terminating newline
    /// included.
    pub(crate) fn render(&self, buf: &mut String) -> Result<(), serde_json::Error> {
        let mut serializer = serde_json::Serializer::new(WriteAdaptor::new(buf));
        self.serialize(&mut serializer)?;
        buf.push('\n');
        Ok(())
    }
}

impl Serialize for LogRecord<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry(
            "timestamp",
            &self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        map.serialize_entry("level", self.level.as_ref())?;
        map.serialize_entry("message", self.message)?;

        for (key, value) in self.details {
            // Fixed fields win on collision.
            if FIXED_FIELDS.contains(&key.as_str()) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

/// Uppercases the severity token. Tokens already in canonical form are
/// borrowed unchanged.
fn normalize_level(level: &str) -> Cow<'_, str> {
    if level.chars().any(char::is_lowercase) {
        Cow::Owned(level.to_uppercase())
    } else {
        Cow::Borrowed(level)
    }
}
