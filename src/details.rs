use std::collections::{btree_map, BTreeMap};

/// Additional fields attached to a log entry.
///
/// This is the open-ended part of a record: any number of named values that
/// are merged into the emitted JSON object at the top level, next to
/// `timestamp`, `level` and `message`. Values are [`serde_json::Value`]s, so
/// scalars, strings, arrays and nested objects are all accepted and none of
/// them are inspected or validated.
///
/// Keys are kept sorted, which makes the emitted lines deterministic. Adding
/// the same key twice keeps the last value.
///
/// # Examples
///
/// ```rust
/// use json_emitter::Details;
///
/// let details = Details::new()
///     .field("duration_ms", 250)
///     .field("database", "user_db");
///
/// json_emitter::emit_with("warn", "Database connection is slow.", details)?;
/// # Ok::<(), json_emitter::EmitError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Details {
    fields: BTreeMap<String, serde_json::Value>,
}

impl Details {
    /// Creates an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, returning `self` for chaining.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a field in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, serde_json::Value> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Details {
    type Item = (&'a String, &'a serde_json::Value);
    type IntoIter = btree_map::Iter<'a, String, serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Details
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Details
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.fields.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Details {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: map.into_iter().collect(),
        }
    }
}
